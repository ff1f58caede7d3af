//! High-level client for the LifePlus healthcare platform API
//!
//! [`LifePlusClient`] aggregates all resource clients behind lazily-built,
//! memoized accessors and manages the authenticated-session lifecycle: login,
//! OTP verification, logout, manual token injection and partner credentials.
//!
//! # Example
//! ```ignore
//! use lifeplus_client::client::LifePlusClient;
//!
//! let client = LifePlusClient::new("https://api.lifeplusbd.com/api/v2");
//! let session = client.login("01712345678", "secret").await?;
//! let products = client
//!     .products()
//!     .list_products(&ListProductsRequest::new().with_page(1).with_per_page(5))
//!     .await?;
//! client.logout().await?;
//! ```

use crate::api::{
    AddressesApi, AmbulanceApi, AppointmentsApi, AuthApi, CartApi, DoctorsApi, HomeCareApi,
    HomeSampleApi, HospitalsApi, LookupApi, OrdersApi, PackagesApi, PartnersApi, ProductsApi,
    TelemedicineApi, WellbeingApi,
};
use crate::config::{Config, SharedConfig};
use crate::error::AppError;
use crate::model::auth::{SessionRequest, SessionResponse};
use crate::transport::ReqwestTransport;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// High-level facade over all LifePlus resource clients
///
/// Owns the shared configuration and the in-memory session. Each resource
/// accessor builds its client on first use with a fresh transport, then
/// returns the cached instance on every later call; all of them observe
/// credential changes through the shared configuration handle.
pub struct LifePlusClient {
    config: SharedConfig,
    session: RwLock<Option<SessionResponse>>,
    auth_api: OnceCell<Arc<AuthApi<ReqwestTransport>>>,
    products_api: OnceCell<Arc<ProductsApi<ReqwestTransport>>>,
    doctors_api: OnceCell<Arc<DoctorsApi<ReqwestTransport>>>,
    hospitals_api: OnceCell<Arc<HospitalsApi<ReqwestTransport>>>,
    appointments_api: OnceCell<Arc<AppointmentsApi<ReqwestTransport>>>,
    orders_api: OnceCell<Arc<OrdersApi<ReqwestTransport>>>,
    cart_api: OnceCell<Arc<CartApi<ReqwestTransport>>>,
    packages_api: OnceCell<Arc<PackagesApi<ReqwestTransport>>>,
    addresses_api: OnceCell<Arc<AddressesApi<ReqwestTransport>>>,
    ambulance_api: OnceCell<Arc<AmbulanceApi<ReqwestTransport>>>,
    home_sample_api: OnceCell<Arc<HomeSampleApi<ReqwestTransport>>>,
    home_care_api: OnceCell<Arc<HomeCareApi<ReqwestTransport>>>,
    telemedicine_api: OnceCell<Arc<TelemedicineApi<ReqwestTransport>>>,
    wellbeing_api: OnceCell<Arc<WellbeingApi<ReqwestTransport>>>,
    partners_api: OnceCell<Arc<PartnersApi<ReqwestTransport>>>,
    lookup_api: OnceCell<Arc<LookupApi<ReqwestTransport>>>,
}

impl LifePlusClient {
    /// Creates a client for the given base URL with default settings
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the API, e.g. `https://api.lifeplusbd.com/api/v2`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_config(Config::with_base_url(base_url))
    }

    /// Creates a client from an explicit configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            config: config.into_shared(),
            session: RwLock::new(None),
            auth_api: OnceCell::new(),
            products_api: OnceCell::new(),
            doctors_api: OnceCell::new(),
            hospitals_api: OnceCell::new(),
            appointments_api: OnceCell::new(),
            orders_api: OnceCell::new(),
            cart_api: OnceCell::new(),
            packages_api: OnceCell::new(),
            addresses_api: OnceCell::new(),
            ambulance_api: OnceCell::new(),
            home_sample_api: OnceCell::new(),
            home_care_api: OnceCell::new(),
            telemedicine_api: OnceCell::new(),
            wellbeing_api: OnceCell::new(),
            partners_api: OnceCell::new(),
            lookup_api: OnceCell::new(),
        }
    }

    /// Returns the shared configuration handle
    pub fn config(&self) -> SharedConfig {
        self.config.clone()
    }

    fn transport(&self) -> Arc<ReqwestTransport> {
        Arc::new(ReqwestTransport::new(self.config.clone()))
    }

    /// Logs in with phone and password
    ///
    /// On success the bearer token from `data.token` is stored into the
    /// configuration's token slot and the session is cached in memory. Errors
    /// from the transport or the server propagate unchanged; local state is
    /// only touched after a verified success.
    pub async fn login(&self, phone: &str, password: &str) -> Result<SessionResponse, AppError> {
        info!("Logging in as {}", phone);

        let request = SessionRequest::new(phone, password);
        let session = self.auth().create_session(&request).await?;
        self.store_session(session.clone()).await;

        info!("✓ Login successful");
        Ok(session)
    }

    /// Verifies a phone number with an OTP code
    ///
    /// Same contract as [`login`](Self::login), via the OTP-verification
    /// endpoint.
    pub async fn verify_phone(&self, phone: &str, otp: &str) -> Result<SessionResponse, AppError> {
        info!("Verifying phone {}", phone);

        let session = self.auth().verify_phone(phone, otp).await?;
        self.store_session(session.clone()).await;

        info!("✓ Phone verified");
        Ok(session)
    }

    async fn store_session(&self, session: SessionResponse) {
        if let Some(token) = session.token() {
            let token = token.to_string();
            let mut config = self.config.write().await;
            config.credentials.access_token = Some(token);
        } else {
            debug!("Session response carried no token");
        }
        *self.session.write().await = Some(session);
    }

    /// Logs out the current user
    ///
    /// No-op when not authenticated. Otherwise calls the server-side logout
    /// endpoint, then clears the in-memory session and the token slot
    /// regardless of the remote outcome; a remote failure is still returned
    /// after the local state has been cleared.
    pub async fn logout(&self) -> Result<(), AppError> {
        if !self.is_authenticated().await {
            return Ok(());
        }

        info!("Logging out");
        let result = self.auth().logout().await;

        if let Err(e) = &result {
            warn!("Server logout failed, clearing local session anyway: {e}");
        }

        {
            let mut config = self.config.write().await;
            config.credentials.access_token = None;
        }
        *self.session.write().await = None;

        result.map(|_| ())
    }

    /// Sets the bearer token manually, without contacting the server
    ///
    /// For pre-obtained tokens. Leaves the partner credential slots untouched.
    pub async fn set_access_token(&self, token: impl Into<String>) {
        let mut config = self.config.write().await;
        config.credentials.access_token = Some(token.into());
    }

    /// Sets the partner (server-to-server) credentials
    ///
    /// Fills the `X-Partner-ID` and `X-API-Key` slots. Independent of the
    /// bearer-token slot; both kinds of credentials may coexist.
    pub async fn set_partner_credentials(
        &self,
        partner_id: impl Into<String>,
        api_key: impl Into<String>,
    ) {
        let mut config = self.config.write().await;
        config.credentials.partner_id = Some(partner_id.into());
        config.credentials.api_key = Some(api_key.into());
    }

    /// Returns the current bearer token, if any
    pub async fn get_access_token(&self) -> Option<String> {
        self.config.read().await.credentials.access_token.clone()
    }

    /// Returns the cached session from the last login or verification, if any
    pub async fn get_session(&self) -> Option<SessionResponse> {
        self.session.read().await.clone()
    }

    /// Returns true when a bearer token is present
    pub async fn is_authenticated(&self) -> bool {
        self.config.read().await.credentials.access_token.is_some()
    }

    // Resource accessors. Each builds its client on first use and caches it
    // for the lifetime of this facade instance.

    /// Auth resource client
    pub fn auth(&self) -> Arc<AuthApi<ReqwestTransport>> {
        self.auth_api
            .get_or_init(|| Arc::new(AuthApi::new(self.transport())))
            .clone()
    }

    /// Products resource client
    pub fn products(&self) -> Arc<ProductsApi<ReqwestTransport>> {
        self.products_api
            .get_or_init(|| Arc::new(ProductsApi::new(self.transport())))
            .clone()
    }

    /// Doctors resource client
    pub fn doctors(&self) -> Arc<DoctorsApi<ReqwestTransport>> {
        self.doctors_api
            .get_or_init(|| Arc::new(DoctorsApi::new(self.transport())))
            .clone()
    }

    /// Hospitals resource client
    pub fn hospitals(&self) -> Arc<HospitalsApi<ReqwestTransport>> {
        self.hospitals_api
            .get_or_init(|| Arc::new(HospitalsApi::new(self.transport())))
            .clone()
    }

    /// Appointments resource client
    pub fn appointments(&self) -> Arc<AppointmentsApi<ReqwestTransport>> {
        self.appointments_api
            .get_or_init(|| Arc::new(AppointmentsApi::new(self.transport())))
            .clone()
    }

    /// Orders resource client
    pub fn orders(&self) -> Arc<OrdersApi<ReqwestTransport>> {
        self.orders_api
            .get_or_init(|| Arc::new(OrdersApi::new(self.transport())))
            .clone()
    }

    /// Cart resource client
    pub fn cart(&self) -> Arc<CartApi<ReqwestTransport>> {
        self.cart_api
            .get_or_init(|| Arc::new(CartApi::new(self.transport())))
            .clone()
    }

    /// Packages resource client
    pub fn packages(&self) -> Arc<PackagesApi<ReqwestTransport>> {
        self.packages_api
            .get_or_init(|| Arc::new(PackagesApi::new(self.transport())))
            .clone()
    }

    /// Addresses resource client
    pub fn addresses(&self) -> Arc<AddressesApi<ReqwestTransport>> {
        self.addresses_api
            .get_or_init(|| Arc::new(AddressesApi::new(self.transport())))
            .clone()
    }

    /// Ambulance resource client
    pub fn ambulance(&self) -> Arc<AmbulanceApi<ReqwestTransport>> {
        self.ambulance_api
            .get_or_init(|| Arc::new(AmbulanceApi::new(self.transport())))
            .clone()
    }

    /// Home sample-collection resource client
    pub fn home_sample(&self) -> Arc<HomeSampleApi<ReqwestTransport>> {
        self.home_sample_api
            .get_or_init(|| Arc::new(HomeSampleApi::new(self.transport())))
            .clone()
    }

    /// Home-care resource client
    pub fn home_care(&self) -> Arc<HomeCareApi<ReqwestTransport>> {
        self.home_care_api
            .get_or_init(|| Arc::new(HomeCareApi::new(self.transport())))
            .clone()
    }

    /// Telemedicine resource client
    pub fn telemedicine(&self) -> Arc<TelemedicineApi<ReqwestTransport>> {
        self.telemedicine_api
            .get_or_init(|| Arc::new(TelemedicineApi::new(self.transport())))
            .clone()
    }

    /// Wellbeing resource client
    pub fn wellbeing(&self) -> Arc<WellbeingApi<ReqwestTransport>> {
        self.wellbeing_api
            .get_or_init(|| Arc::new(WellbeingApi::new(self.transport())))
            .clone()
    }

    /// Partners resource client
    pub fn partners(&self) -> Arc<PartnersApi<ReqwestTransport>> {
        self.partners_api
            .get_or_init(|| Arc::new(PartnersApi::new(self.transport())))
            .clone()
    }

    /// Lookup resource client
    pub fn lookup(&self) -> Arc<LookupApi<ReqwestTransport>> {
        self.lookup_api
            .get_or_init(|| Arc::new(LookupApi::new(self.transport())))
            .clone()
    }
}
