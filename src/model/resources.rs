//! Resource records returned by the LifePlus API
//!
//! Plain data mirrors of the server's JSON shapes. Fields default when absent
//! or null; the server remains the source of truth, no cross-entity invariants
//! are enforced client-side.

use crate::model::serialization::{option_string_empty_as_none, string_as_float_opt};
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A pharmacy or lifestyle product
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct Product {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    /// Unit price in BDT; the API sometimes sends this as a string
    #[serde(default, with = "string_as_float_opt")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub generic_name: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub category_id: Option<u64>,
    #[serde(default)]
    pub in_stock: bool,
}

/// A product or content category
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct Category {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub slug: Option<String>,
}

/// A doctor available for appointments or telemedicine
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct Doctor {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub specialty_id: Option<u64>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub specialty_name: Option<String>,
    #[serde(default, with = "string_as_float_opt")]
    pub consultation_fee: Option<f64>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub qualifications: Option<String>,
    #[serde(default)]
    pub hospital_id: Option<u64>,
}

/// A medical specialty
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct Specialty {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

/// A hospital or diagnostic center
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct Hospital {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub district: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub phone: Option<String>,
}

/// A booked doctor appointment
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct Appointment {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub doctor_id: u64,
    #[serde(default)]
    pub hospital_id: Option<u64>,
    /// Appointment date, `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,
    /// Time slot label, e.g. `10:00-10:20`
    #[serde(default)]
    pub slot: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A line item inside a cart
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct CartItem {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub product_id: u64,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default, with = "string_as_float_opt")]
    pub unit_price: Option<f64>,
}

/// The current user's shopping cart
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct Cart {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default, with = "string_as_float_opt")]
    pub total: Option<f64>,
}

/// A placed order
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct Order {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default, with = "string_as_float_opt")]
    pub total: Option<f64>,
    #[serde(default)]
    pub address_id: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A healthcare package (bundled tests or services)
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct Package {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default, with = "string_as_float_opt")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub test_count: Option<u32>,
}

/// A saved delivery address
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct Address {
    #[serde(default)]
    pub id: u64,
    /// User-facing label, e.g. `Home` or `Office`
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub line1: String,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub area: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub district: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub postcode: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub phone: Option<String>,
}

/// An ambulance category offered by the platform
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct AmbulanceType {
    #[serde(default)]
    pub id: u64,
    /// e.g. `AC`, `ICU`, `Freezing`
    #[serde(default)]
    pub name: String,
    #[serde(default, with = "string_as_float_opt")]
    pub base_fare: Option<f64>,
}

/// A requested ambulance trip
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct AmbulanceBooking {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub ambulance_type_id: u64,
    #[serde(default)]
    pub pickup_address: String,
    #[serde(default)]
    pub destination_address: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A home sample-collection booking
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct HomeSampleBooking {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub package_id: Option<u64>,
    #[serde(default)]
    pub address_id: u64,
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub slot: Option<String>,
    #[serde(default)]
    pub status: String,
}

/// A home-care service (nursing, physiotherapy, attendant care)
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct HomeCareService {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default, with = "string_as_float_opt")]
    pub daily_rate: Option<f64>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub description: Option<String>,
}

/// A booked home-care engagement
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct HomeCareBooking {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub service_id: u64,
    #[serde(default)]
    pub address_id: u64,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub duration_days: Option<u32>,
    #[serde(default)]
    pub status: String,
}

/// An available telemedicine slot for a doctor
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct TelemedicineSlot {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub doctor_id: u64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub slot: String,
    #[serde(default)]
    pub available: bool,
}

/// A booked telemedicine call
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct TelemedicineCall {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub doctor_id: u64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub slot: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub call_url: Option<String>,
}

/// A wellbeing article or tip
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct WellbeingArticle {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// An order placed through the partner (server-to-server) channel
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct PartnerOrder {
    #[serde(default)]
    pub id: u64,
    /// Partner-side reference supplied at creation
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, with = "string_as_float_opt")]
    pub total: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A district used for address and hospital lookups
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct District {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

/// A payment method accepted at checkout
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct PaymentMethod {
    #[serde(default)]
    pub id: u64,
    /// Stable key sent back when creating an order, e.g. `cod`, `bkash`
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
}
