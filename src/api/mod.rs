//! Per-resource API clients
//!
//! Each client is scoped to one API domain and generic over the
//! [`HttpTransport`](crate::transport::HttpTransport) seam. All of them share
//! the facade's configuration through the transport they were built with;
//! pagination and search parameters pass through to the wire unchanged.

/// Module containing the addresses resource client
pub mod addresses;
/// Module containing the ambulance resource client
pub mod ambulance;
/// Module containing the appointments resource client
pub mod appointments;
/// Module containing the auth resource client
pub mod auth;
/// Module containing the cart resource client
pub mod cart;
/// Module containing the doctors resource client
pub mod doctors;
/// Module containing the home-care resource client
pub mod home_care;
/// Module containing the home-sample resource client
pub mod home_sample;
/// Module containing the hospitals resource client
pub mod hospitals;
/// Module containing the lookup resource client
pub mod lookup;
/// Module containing the orders resource client
pub mod orders;
/// Module containing the packages resource client
pub mod packages;
/// Module containing the partners resource client
pub mod partners;
/// Module containing the products resource client
pub mod products;
/// Module containing the telemedicine resource client
pub mod telemedicine;
/// Module containing the wellbeing resource client
pub mod wellbeing;

pub use addresses::AddressesApi;
pub use ambulance::AmbulanceApi;
pub use appointments::AppointmentsApi;
pub use auth::AuthApi;
pub use cart::CartApi;
pub use doctors::DoctorsApi;
pub use home_care::HomeCareApi;
pub use home_sample::HomeSampleApi;
pub use hospitals::HospitalsApi;
pub use lookup::LookupApi;
pub use orders::OrdersApi;
pub use packages::PackagesApi;
pub use partners::PartnersApi;
pub use products::ProductsApi;
pub use telemedicine::TelemedicineApi;
pub use wellbeing::WellbeingApi;
