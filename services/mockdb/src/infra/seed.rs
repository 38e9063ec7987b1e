use crate::domain::types::{Product, SeedData, SeedError, User};

/// Records served when no other seed is supplied.
pub fn default_seed() -> Result<SeedData, SeedError> {
    let users = vec![
        User {
            id: 1,
            name: "John Doe".into(),
            email: "john@example.com".into(),
        },
        User {
            id: 2,
            name: "Jane Smith".into(),
            email: "jane@example.com".into(),
        },
    ];
    let products = vec![
        Product {
            id: 1,
            name: "Widget A".into(),
            price: 19.99,
        },
        Product {
            id: 2,
            name: "Widget B".into(),
            price: 29.99,
        },
    ];
    SeedData::new(users, products)
}
