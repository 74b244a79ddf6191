//! Bundled demo corpora for the comparison and benchmark commands.
//!
//! Every constructor returns a fresh `Value`, and the contents are fixed, so
//! repeated runs produce identical reports.

use serde_json::{Value, json};

/// Instruction sent ahead of the product data in the LLM benchmark.
pub const ANALYSIS_PROMPT: &str = "You are a helpful assistant. Analyze the product data below and list all products that are:\nIn the \"Electronics\" category and is less than $50. \nFormat your response as a simple list.";

/// System message for every benchmark chat request.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that analyzes data accurately.";

/// Five users with mixed roles, small enough to read in every format.
pub fn small_users() -> Value {
    json!({
        "users": [
            { "id": 1, "name": "Alice", "role": "admin", "lastLogin": "2025-01-15T10:30:00Z" },
            { "id": 2, "name": "Bob", "role": "user", "lastLogin": "2025-01-14T15:22:00Z" },
            { "id": 3, "name": "Charlie", "role": "user", "lastLogin": "2025-01-13T09:45:00Z" },
            { "id": 4, "name": "Diana", "role": "moderator", "lastLogin": "2025-01-12T11:00:00Z" },
            { "id": 5, "name": "Eve", "role": "user", "lastLogin": "2025-01-11T08:30:00Z" }
        ]
    })
}

/// Ten products mixing plain and awkward names (colons, quotes, spaces).
pub fn product_catalog() -> Value {
    json!({
        "products": [
            { "id": 1, "name": "Widget", "price": 9.99, "category": "tools", "inStock": true },
            { "id": 2, "name": "Gadget", "price": 14.50, "category": "tools", "inStock": true },
            { "id": 3, "name": "Book: Advanced Python", "price": 29.99, "category": "books", "inStock": false },
            { "id": 4, "name": "Notebook", "price": 5.99, "category": "stationery", "inStock": true },
            { "id": 5, "name": "Pen Set", "price": 12.99, "category": "stationery", "inStock": true },
            { "id": 6, "name": "Coffee Mug", "price": 8.50, "category": "lifestyle", "inStock": true },
            { "id": 7, "name": "Monitor 24\"", "price": 199.99, "category": "electronics", "inStock": true },
            { "id": 8, "name": "USB Cable", "price": 4.99, "category": "electronics", "inStock": true },
            { "id": 9, "name": "T-Shirt", "price": 19.99, "category": "clothing", "inStock": true },
            { "id": 10, "name": "Sneakers", "price": 79.99, "category": "clothing", "inStock": false }
        ]
    })
}

/// Synthetic order log. Every field is a function of the index, so the same
/// `count` always yields the same orders.
pub fn order_log(count: usize) -> Value {
    const STATUSES: [&str; 3] = ["pending", "completed", "shipped"];

    let orders: Vec<Value> = (0..count)
        .map(|i| {
            let cents = 1000 + (i * 731) % 9000;
            let day = (i % 28) + 1;
            let hour = (i * 3) % 24;
            json!({
                "id": i + 1,
                "customerId": (i % 5) + 1,
                "productId": (i % 10) + 1,
                "quantity": ((i * 7) % 5) + 1,
                "price": cents as f64 / 100.0,
                "date": format!("2025-01-{day:02}T{hour:02}:00:00Z"),
                "status": STATUSES[i % 3],
            })
        })
        .collect();

    json!({ "orders": orders })
}

/// Product table the LLM benchmark asks questions about.
pub fn bench_products() -> Value {
    json!({
        "products": [
            { "id": 1, "name": "Wireless Mouse", "price": 29.99, "category": "Electronics", "inStock": true },
            { "id": 2, "name": "Mechanical Keyboard", "price": 89.99, "category": "Electronics", "inStock": true },
            { "id": 3, "name": "USB-C Hub", "price": 45.00, "category": "Electronics", "inStock": false },
            { "id": 4, "name": "Monitor Stand", "price": 39.99, "category": "Office", "inStock": true },
            { "id": 5, "name": "Desk Lamp", "price": 24.99, "category": "Office", "inStock": true },
            { "id": 6, "name": "Ergonomic Chair", "price": 249.99, "category": "Furniture", "inStock": true },
            { "id": 7, "name": "Standing Desk", "price": 499.99, "category": "Furniture", "inStock": false },
            { "id": 8, "name": "Cable Management", "price": 12.99, "category": "Office", "inStock": true }
        ]
    })
}
