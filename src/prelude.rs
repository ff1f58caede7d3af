//! # LifePlus Client Prelude
//!
//! Convenient single import for the types needed in most interactions with
//! the LifePlus API.
//!
//! ## Usage
//!
//! ```rust
//! use lifeplus_client::prelude::*;
//!
//! let client = LifePlusClient::new("https://api.lifeplusbd.com/api/v2");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the LifePlus API client
pub use crate::config::{Config, Credentials, SharedConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error types for the library
pub use crate::error::{ApiError, AppError};

// ============================================================================
// FACADE AND TRANSPORT
// ============================================================================

/// High-level facade client
pub use crate::client::LifePlusClient;

/// HTTP transport trait and implementation
pub use crate::transport::{HttpTransport, ReqwestTransport};

// ============================================================================
// RESOURCE CLIENTS
// ============================================================================

pub use crate::api::{
    AddressesApi, AmbulanceApi, AppointmentsApi, AuthApi, CartApi, DoctorsApi, HomeCareApi,
    HomeSampleApi, HospitalsApi, LookupApi, OrdersApi, PackagesApi, PartnersApi, ProductsApi,
    TelemedicineApi, WellbeingApi,
};

// ============================================================================
// MODELS
// ============================================================================

/// Authentication models
pub use crate::model::auth::{
    OtpRequest, SessionData, SessionRequest, SessionResponse, UserProfile, VerifyPhoneRequest,
};

/// Request parameter types
pub use crate::model::requests::{
    AddToCartRequest, AmbulanceRequest, BookAppointmentRequest, BookCallRequest,
    CreateAddressRequest, CreateOrderRequest, HomeCareRequest, HomeSampleRequest,
    ListContentRequest, ListDoctorsRequest, ListProductsRequest, PageRequest, PartnerOrderItem,
    PartnerOrderRequest, SearchRequest, UpdateCartItemRequest,
};

/// Resource records
pub use crate::model::resources::{
    Address, AmbulanceBooking, AmbulanceType, Appointment, Cart, CartItem, Category, District,
    Doctor, HomeCareBooking, HomeCareService, HomeSampleBooking, Hospital, Order, Package,
    PartnerOrder, PaymentMethod, Product, Specialty, TelemedicineCall, TelemedicineSlot,
    WellbeingArticle,
};

/// Response wrappers
pub use crate::model::responses::{Envelope, MessageResponse};

// ============================================================================
// UTILITIES
// ============================================================================

/// Formatting and conversion helpers
pub use crate::utils::helpers::{
    format_phone, format_price, generate_request_id, is_json, to_json_value,
};

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest method type for custom transport implementations
pub use reqwest::Method;
