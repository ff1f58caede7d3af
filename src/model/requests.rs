//! Request parameter types for resource clients
//!
//! List requests expose `with_*` builders and serialize their parameters into
//! query pairs unchanged; the server does the paging, the client never re-pages.

use crate::constants::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Plain pagination parameters shared by simple list endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number, 1-based (server default when omitted)
    pub page: Option<u32>,
    /// Items per page (server default when omitted)
    pub per_page: Option<u32>,
}

impl PageRequest {
    /// Creates pagination parameters for a specific page
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }

    /// Creates pagination parameters for the first page with the default size
    pub fn first() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PER_PAGE)
    }

    /// Serializes the parameters into query pairs
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page", per_page.to_string()));
        }
        query
    }
}

/// Parameters for listing products
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListProductsRequest {
    /// Page number, 1-based
    pub page: Option<u32>,
    /// Items per page
    pub per_page: Option<u32>,
    /// Free-text search term
    pub search_key: Option<String>,
    /// Restrict to a category
    pub category_id: Option<u64>,
}

impl ListProductsRequest {
    /// Creates an empty request (server defaults apply)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Set the search term
    pub fn with_search_key(mut self, search_key: impl Into<String>) -> Self {
        self.search_key = Some(search_key.into());
        self
    }

    /// Restrict results to a category
    pub fn with_category_id(mut self, category_id: u64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Serializes the parameters into query pairs
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page", per_page.to_string()));
        }
        if let Some(search_key) = &self.search_key {
            query.push(("search_key", search_key.clone()));
        }
        if let Some(category_id) = self.category_id {
            query.push(("category_id", category_id.to_string()));
        }
        query
    }
}

/// Parameters for listing doctors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListDoctorsRequest {
    /// Page number, 1-based
    pub page: Option<u32>,
    /// Items per page
    pub per_page: Option<u32>,
    /// Free-text search term (name, qualification)
    pub search_key: Option<String>,
    /// Restrict to a specialty
    pub specialty_id: Option<u64>,
}

impl ListDoctorsRequest {
    /// Creates an empty request (server defaults apply)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Set the search term
    pub fn with_search_key(mut self, search_key: impl Into<String>) -> Self {
        self.search_key = Some(search_key.into());
        self
    }

    /// Restrict results to a specialty
    pub fn with_specialty_id(mut self, specialty_id: u64) -> Self {
        self.specialty_id = Some(specialty_id);
        self
    }

    /// Serializes the parameters into query pairs
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page", per_page.to_string()));
        }
        if let Some(search_key) = &self.search_key {
            query.push(("search_key", search_key.clone()));
        }
        if let Some(specialty_id) = self.specialty_id {
            query.push(("specialty_id", specialty_id.to_string()));
        }
        query
    }
}

/// Pagination plus a free-text search term, used by hospitals and packages
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Page number, 1-based
    pub page: Option<u32>,
    /// Items per page
    pub per_page: Option<u32>,
    /// Free-text search term
    pub search_key: Option<String>,
}

impl SearchRequest {
    /// Creates an empty request (server defaults apply)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Set the search term
    pub fn with_search_key(mut self, search_key: impl Into<String>) -> Self {
        self.search_key = Some(search_key.into());
        self
    }

    /// Serializes the parameters into query pairs
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page", per_page.to_string()));
        }
        if let Some(search_key) = &self.search_key {
            query.push(("search_key", search_key.clone()));
        }
        query
    }
}

/// Payload for booking a doctor appointment
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct BookAppointmentRequest {
    pub doctor_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospital_id: Option<u64>,
    /// Appointment date, `YYYY-MM-DD`
    pub date: String,
    /// Time slot label, e.g. `10:00-10:20`
    pub slot: String,
}

/// Payload for creating an order from a cart
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct CreateOrderRequest {
    pub cart_id: u64,
    pub address_id: u64,
    /// Payment method key, e.g. `cod` or `bkash`
    pub payment_method: String,
}

impl CreateOrderRequest {
    /// Creates an order request from its three required parts
    pub fn new(cart_id: u64, address_id: u64, payment_method: impl Into<String>) -> Self {
        Self {
            cart_id,
            address_id,
            payment_method: payment_method.into(),
        }
    }
}

/// Payload for adding a product to the cart
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct AddToCartRequest {
    pub product_id: u64,
    pub quantity: u32,
}

/// Payload for changing the quantity of a cart item
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct UpdateCartItemRequest {
    pub quantity: u32,
}

/// Payload for creating or updating a delivery address
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct CreateAddressRequest {
    /// User-facing label, e.g. `Home`
    pub label: String,
    pub line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Payload for requesting an ambulance
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct AmbulanceRequest {
    pub ambulance_type_id: u64,
    pub pickup_address: String,
    pub destination_address: String,
    /// Contact phone for the dispatcher
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Payload for booking a home sample collection
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct HomeSampleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<u64>,
    pub address_id: u64,
    /// Collection date, `YYYY-MM-DD`
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<String>,
}

/// Payload for booking a home-care service
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct HomeCareRequest {
    pub address_id: u64,
    /// First day of care, `YYYY-MM-DD`
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Payload for booking a telemedicine call
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct BookCallRequest {
    pub doctor_id: u64,
    /// Call date, `YYYY-MM-DD`
    pub date: String,
    /// Time slot label from [`crate::model::resources::TelemedicineSlot`]
    pub slot: String,
}

/// Parameters for listing wellbeing content
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListContentRequest {
    /// Page number, 1-based
    pub page: Option<u32>,
    /// Items per page
    pub per_page: Option<u32>,
    /// Restrict to a category slug
    pub category: Option<String>,
}

impl ListContentRequest {
    /// Creates an empty request (server defaults apply)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Restrict results to a category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Serializes the parameters into query pairs
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page", per_page.to_string()));
        }
        if let Some(category) = &self.category {
            query.push(("category", category.clone()));
        }
        query
    }
}

/// A line item in a partner order
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct PartnerOrderItem {
    pub product_id: u64,
    pub quantity: u32,
}

/// Payload for creating a partner (server-to-server) order
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct PartnerOrderRequest {
    /// Partner-side reference, must be unique per partner
    pub reference: String,
    pub items: Vec<PartnerOrderItem>,
    pub customer_name: String,
    pub customer_phone: String,
    pub delivery_address: String,
}
