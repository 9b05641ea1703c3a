//! Seeded mock catalog.
//!
//! Every new store starts from this fixed registry: two sellers (one
//! verified, one pending), ten sneaker listings, and the admin singleton.
//! Nothing here survives the process.

use chrono::NaiveDate;
use secrecy::SecretString;

use emberkicks_core::{Category, Condition, Email, Price, ProductId, SellerId, UserId};

use crate::models::{AdminProfile, Product, SellerProfile};

fn email(address: &str) -> Email {
    Email::parse(address).expect("seed email is valid")
}

fn joined(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed date is valid")
}

/// The seller registry at process start.
#[must_use]
pub fn sellers() -> Vec<SellerProfile> {
    vec![
        SellerProfile {
            id: SellerId::new("s1"),
            name: "Jordan Mike".to_owned(),
            email: email("mike@soles.com"),
            password: SecretString::from("password123"),
            business_name: "OG Soles".to_owned(),
            is_verified: true,
            joined_date: joined(2023, 1, 15),
        },
        SellerProfile {
            id: SellerId::new("s2"),
            name: "Sarah Kicks".to_owned(),
            email: email("sarah@kicks.com"),
            password: SecretString::from("password123"),
            business_name: "Kicks 4 U".to_owned(),
            is_verified: false,
            joined_date: joined(2023, 10, 20),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    seller_id: &str,
    title: &str,
    dollars: i64,
    image: &str,
    description: &str,
    size: &str,
    condition: Condition,
    category: Category,
    on_sale: bool,
) -> Product {
    Product {
        id: ProductId::new(id),
        seller_id: SellerId::new(seller_id),
        title: title.to_owned(),
        price: Price::from_dollars(dollars),
        image: image.to_owned(),
        description: description.to_owned(),
        size: size.to_owned(),
        condition,
        category,
        on_sale,
    }
}

/// The catalog at process start.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        listing(
            "p1",
            "s1",
            "Air Max 90 \"Infrared\"",
            180,
            "https://images.unsplash.com/photo-1606107557195-0e29a4b5b4aa?auto=format&fit=crop&w=800&q=80",
            "Classic silhouette in mint condition. Original box included.",
            "10 US",
            Condition::New,
            Category::Men,
            false,
        ),
        listing(
            "p2",
            "s1",
            "Yeezy Boost 350 V2",
            320,
            "https://images.unsplash.com/photo-1600185365483-26d7a4cc7519?auto=format&fit=crop&w=800&q=80",
            "Lightly worn, great condition. Verified authentic.",
            "9.5 US",
            Condition::Used,
            Category::Men,
            false,
        ),
        listing(
            "p3",
            "s2",
            "Dunk Low \"Panda\"",
            150,
            "https://images.unsplash.com/photo-1595950653106-6c9ebd614d3a?auto=format&fit=crop&w=800&q=80",
            "Brand new, never worn. Receipt available.",
            "11 US",
            Condition::New,
            Category::Men,
            false,
        ),
        listing(
            "p4",
            "s1",
            "Air Jordan 1 High OG",
            200,
            "https://images.unsplash.com/photo-1556906781-9a412961d289?auto=format&fit=crop&w=800&q=80",
            "Iconic colorway. Must have for collectors.",
            "8 US",
            Condition::New,
            Category::Women,
            true,
        ),
        listing(
            "p5",
            "s1",
            "Air Force 1 Low",
            90,
            "https://images.unsplash.com/photo-1549298916-b41d501d3772?auto=format&fit=crop&w=800&q=80",
            "Classic white on white. Clean and versatile.",
            "7 US",
            Condition::New,
            Category::Women,
            false,
        ),
        listing(
            "p6",
            "s2",
            "Kids Jordan 4 Retro",
            120,
            "https://images.unsplash.com/photo-1514989940723-e8875ea6ab7d?auto=format&fit=crop&w=800&q=80",
            "Perfect for the little ones. Durable and stylish.",
            "4Y",
            Condition::New,
            Category::Kids,
            false,
        ),
        listing(
            "p7",
            "s1",
            "Kids Air Max 270",
            85,
            "https://images.unsplash.com/photo-1515347619252-60a6bf4fffce?auto=format&fit=crop&w=800&q=80",
            "Comfortable everyday shoes for active kids.",
            "5Y",
            Condition::Used,
            Category::Kids,
            true,
        ),
        listing(
            "p8",
            "s2",
            "Blazer Mid 77",
            80,
            "https://images.unsplash.com/photo-1628253747716-0c4f5c90fdda?auto=format&fit=crop&w=800&q=80",
            "Vintage look with modern comfort.",
            "10 US",
            Condition::New,
            Category::Men,
            true,
        ),
        listing(
            "p9",
            "s1",
            "Zoom Fly 5",
            140,
            "https://images.unsplash.com/photo-1606107557195-0e29a4b5b4aa?auto=format&fit=crop&w=800&q=80",
            "High performance running shoes.",
            "8.5 US",
            Condition::New,
            Category::Women,
            false,
        ),
        listing(
            "p10",
            "s1",
            "Vans Old Skool",
            50,
            "https://images.unsplash.com/photo-1525966222134-fcfa99b8ae77?auto=format&fit=crop&w=800&q=80",
            "Classic skate shoe.",
            "9 US",
            Condition::Used,
            Category::Unisex,
            true,
        ),
    ]
}

/// The distinguished admin singleton.
#[must_use]
pub fn admin() -> AdminProfile {
    AdminProfile {
        id: UserId::new("admin1"),
        name: "System Admin".to_owned(),
        email: email("admin@emberkicks.com"),
        password: SecretString::from("admin"),
    }
}
