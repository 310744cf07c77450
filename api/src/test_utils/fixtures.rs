//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::NaiveDate;

use crate::app::CustomerRequest;
use crate::domain::entities::{Address, Customer, CustomerId};

/// Create a test address with the given id and city
pub fn test_address(address_id: &str, city: &str) -> Address {
    Address {
        address_id: Some(address_id.to_string()),
        address_type: Some("home".to_string()),
        customer_id: None,
        flat_number: Some("4B".to_string()),
        plot_number: Some("17".to_string()),
        building_name: Some("Lotus Residency".to_string()),
        road_number: Some(3),
        street: Some("MG Road".to_string()),
        city: Some(city.to_string()),
        country: Some("India".to_string()),
        pin_code: Some(411001),
    }
}

/// Create a fully populated test customer
pub fn test_customer(id: &str) -> Customer {
    let mut home = test_address("A1", "Pune");
    home.customer_id = Some(id.to_string());
    let mut work = test_address("A2", "Mumbai");
    work.customer_id = Some(id.to_string());
    work.address_type = Some("work".to_string());

    Customer {
        customer_id: CustomerId::from(id),
        customer_name: Some(format!("Customer {}", id)),
        customer_dob: NaiveDate::from_ymd_opt(1990, 1, 1),
        phone_number: Some("+91-9000000000".to_string()),
        email: Some(format!("{}@example.com", id.to_lowercase())),
        password: Some("plain-text-password".to_string()),
        addresses: vec![home, work],
    }
}

/// Create a request matching `test_customer(id)`
pub fn test_customer_request(id: &str) -> CustomerRequest {
    let customer = test_customer(id);
    CustomerRequest {
        customer_id: customer.customer_id,
        customer_name: customer.customer_name,
        customer_dob: customer.customer_dob,
        phone_number: customer.phone_number,
        email: customer.email,
        password: customer.password,
        addresses: customer.addresses,
    }
}
