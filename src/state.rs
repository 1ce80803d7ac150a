use std::sync::Arc;

use crate::{
  config::AppConfig,
  domains::{
    address::{
      model::{AutocompleteResult, ResolvedAddress},
      service::{AddressResolver, AddressResolverImpl, AddressServiceError, ResolverSettings},
    },
    mail::{
      model::{DispatchResult, SendEmailRequest},
      service::{MailDispatcher, MailDispatcherImpl, MailServiceError, SenderIdentity},
    },
  },
  email::EmailService,
  error::ConfigError,
  middleware::auth::AccessPolicy,
  places::GooglePlacesClient,
  utils::build_http_client,
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn autocomplete(
    &self,
    query: &str,
    region: Option<&str>,
  ) -> impl std::future::Future<Output = Result<AutocompleteResult, AddressServiceError>> + Send;
  fn resolve_details(
    &self,
    place_id: &str,
    label: Option<&str>,
  ) -> impl std::future::Future<Output = Result<ResolvedAddress, AddressServiceError>> + Send;
  fn send_email(
    &self,
    req: SendEmailRequest,
  ) -> impl std::future::Future<Output = Result<DispatchResult, MailServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub address_resolver: Arc<AddressResolverImpl<GooglePlacesClient>>,
  pub mail_dispatcher: Arc<MailDispatcherImpl<EmailService>>,
  pub access: Arc<AccessPolicy>,
}

impl SharedAppState {
  /// Builds both upstream clients once; they are shared by every request.
  pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
    let http = build_http_client(config.upstream_timeout)?;

    let places_client = GooglePlacesClient::new(http.clone(), &config.places);
    let address_resolver = Arc::new(AddressResolverImpl::new(
      places_client,
      ResolverSettings::from(&config.places),
    ));

    let email_service = EmailService::new(http, &config.mail);
    let mail_dispatcher = Arc::new(MailDispatcherImpl::new(email_service, SenderIdentity::from(&config.mail)));

    let access = Arc::new(AccessPolicy {
      api_key: config.api_key.clone(),
      allowed_origins: config.allowed_origins.clone(),
    });

    Ok(Self {
      address_resolver,
      mail_dispatcher,
      access,
    })
  }
}

impl AppState for SharedAppState {
  async fn autocomplete(&self, query: &str, region: Option<&str>) -> Result<AutocompleteResult, AddressServiceError> {
    self.address_resolver.autocomplete(query, region).await
  }

  async fn resolve_details(&self, place_id: &str, label: Option<&str>) -> Result<ResolvedAddress, AddressServiceError> {
    self.address_resolver.resolve_details(place_id, label).await
  }

  async fn send_email(&self, req: SendEmailRequest) -> Result<DispatchResult, MailServiceError> {
    self.mail_dispatcher.send(&req.to, &req.subject, &req.html).await
  }
}
