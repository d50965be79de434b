//! Storefront Shell Entry Point
//!
//! Terminal front-end over the client crates: the auth wizard, the
//! route-guarded views (dashboard, profile, shop onboarding, seller),
//! and the session lifecycle wiring. Uses `anyhow` for startup
//! errors; everything user-facing goes through the crate error types.

mod prompt;

use std::env;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth::forms::{
    ChangePasswordForm, ForgotPasswordForm, LoginForm, RegisterForm, RequestVerifyForm,
    ResetPasswordForm, VerifyAccountForm,
};
use auth::models::Identity;
use auth::{
    AuthConfig, AuthStep, AuthWizard, HttpAuthGateway, RouteDecision, SessionStore, WizardEffect,
    route_decision,
};
use catalog::{
    HttpCatalogGateway, ImageUpload, ProductListingForm, ProfileGateway, ShopGateway,
    ShopOnboardingForm, UserQuery,
};
use kernel::id::{ShopId, UserId};
use platform::config::ApiConfig;
use platform::event::{SessionEventReceiver, session_event_channel};
use platform::http::ApiClient;
use platform::token::FileTokenStore;
use prompt::Prompt;

/// Environment variable overriding where the token file lives
const TOKEN_PATH_ENV: &str = "MINI_E_TOKEN_PATH";
const DEFAULT_TOKEN_PATH: &str = ".mini-e/token";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shell=info,auth=info,catalog=info,platform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Starting storefront shell");

    let token_path =
        env::var(TOKEN_PATH_ENV).unwrap_or_else(|_| DEFAULT_TOKEN_PATH.to_string());
    let tokens = Arc::new(FileTokenStore::new(token_path));

    let (events, expirations) = session_event_channel();
    let client = ApiClient::new(config, Arc::clone(&tokens)).with_session_events(events);

    let auth_gateway = HttpAuthGateway::new(client.clone());
    let catalog_gateway = HttpCatalogGateway::new(client);

    // Resolve the persisted token before rendering anything
    let session = SessionStore::new(tokens);
    session.bootstrap(&auth_gateway).await;

    let mut shell = Shell {
        session,
        auth_gateway,
        catalog_gateway,
        expirations,
        auth_config: AuthConfig::default(),
        prompt: Prompt::new(),
        route: Route::Home,
    };
    shell.run().await
}

// ============================================================
// Shell
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Home,
    Auth,
    Dashboard,
    Profile,
    ShopOnboarding,
    Seller,
}

struct Shell {
    session: SessionStore<FileTokenStore>,
    auth_gateway: HttpAuthGateway<FileTokenStore>,
    catalog_gateway: HttpCatalogGateway<FileTokenStore>,
    expirations: SessionEventReceiver,
    auth_config: AuthConfig,
    prompt: Prompt,
    route: Route,
}

impl Shell {
    async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.drain_expirations();

            let stay = match self.route {
                Route::Home => self.home().await?,
                Route::Auth => self.wizard().await?,
                Route::Dashboard => self.guarded(Route::Dashboard).await?,
                Route::Profile => self.guarded(Route::Profile).await?,
                Route::ShopOnboarding => self.guarded(Route::ShopOnboarding).await?,
                Route::Seller => self.guarded(Route::Seller).await?,
            };
            if !stay {
                println!("Bye.");
                return Ok(());
            }
        }
    }

    /// Apply any session expiry the HTTP layer reported since the
    /// last iteration. Kicking the user to the wizard happens here,
    /// never inside the HTTP client.
    fn drain_expirations(&mut self) {
        let mut expired = false;
        while self.expirations.try_recv().is_ok() {
            expired = true;
        }
        if expired {
            self.session.expire_local();
            println!("Your session has expired, please sign in again.");
            if self.route != Route::Auth {
                self.route = Route::Auth;
            }
        }
    }

    /// Route guard in front of every protected view
    async fn guarded(&mut self, route: Route) -> anyhow::Result<bool> {
        match route_decision(&self.session.snapshot()) {
            RouteDecision::Loading => Ok(true),
            RouteDecision::RedirectToAuth => {
                self.route = Route::Auth;
                Ok(true)
            }
            RouteDecision::Allow => match route {
                Route::Dashboard => self.dashboard().await,
                Route::Profile => self.profile().await,
                Route::ShopOnboarding => self.shop_onboarding().await,
                Route::Seller => self.seller().await,
                Route::Home | Route::Auth => Ok(true),
            },
        }
    }

    // --------------------------------------------------------
    // Home
    // --------------------------------------------------------

    async fn home(&mut self) -> anyhow::Result<bool> {
        println!("\n== Mini-E Storefront ==");
        match self.session.snapshot().identity() {
            Some(identity) => println!("Signed in as {} <{}>", identity.name, identity.email),
            None => println!("Browsing as guest"),
        }
        println!("[1] dashboard  [2] profile  [3] open a shop  [4] seller tools");
        if self.session.snapshot().is_authenticated() {
            println!("[5] sign out  [q] quit");
        } else {
            println!("[5] sign in / register  [q] quit");
        }

        match self.prompt.line("home").await?.as_str() {
            "1" => self.route = Route::Dashboard,
            "2" => self.route = Route::Profile,
            "3" => self.route = Route::ShopOnboarding,
            "4" => self.route = Route::Seller,
            "5" => {
                if self.session.snapshot().is_authenticated() {
                    self.sign_out().await;
                } else {
                    self.route = Route::Auth;
                }
            }
            "q" => return Ok(false),
            _ => {}
        }
        Ok(true)
    }

    /// Local teardown runs regardless of the API outcome: the user
    /// asked to leave, so they leave.
    async fn sign_out(&mut self) {
        use auth::gateway::AuthGateway;
        if let Err(err) = self.auth_gateway.logout().await {
            err.log();
        }
        self.session.logout().await;
        println!("Signed out.");
    }

    // --------------------------------------------------------
    // Auth wizard
    // --------------------------------------------------------

    async fn wizard(&mut self) -> anyhow::Result<bool> {
        let mut wizard = AuthWizard::new(self.auth_config.clone());
        let snapshot = self.session.snapshot();
        if let Some(identity) = snapshot.identity() {
            if identity.verified {
                // Nothing left to do here
                self.route = Route::Home;
                return Ok(true);
            }
            wizard.switch_to(AuthStep::RequestVerify);
        }

        loop {
            println!("\n-- {} --  (goto <step> | home | q)", wizard.step());
            let effect = match wizard.step() {
                AuthStep::Register => self.step_register(&mut wizard).await?,
                AuthStep::Login => self.step_login(&mut wizard).await?,
                AuthStep::RequestVerify => self.step_request_verify(&mut wizard).await?,
                AuthStep::VerifyAccount => self.step_verify_account(&mut wizard).await?,
                AuthStep::ForgotPassword => self.step_forgot_password(&mut wizard).await?,
                AuthStep::ResetPassword => self.step_reset_password(&mut wizard).await?,
            };

            match effect {
                Some(WizardEffect::Stay) => {}
                Some(WizardEffect::NavigateHome) => {
                    self.route = Route::Home;
                    return Ok(true);
                }
                Some(WizardEffect::NavigateHomeAfter(delay)) => {
                    // Leave exactly once, after the message has been seen
                    tokio::time::sleep(delay).await;
                    self.route = Route::Home;
                    return Ok(true);
                }
                None => return Ok(false),
            }
        }
    }

    /// Shared step commands. `Some(effect)` when handled here.
    fn step_command(wizard: &mut AuthWizard, input: &str) -> Option<Option<WizardEffect>> {
        if let Some(name) = input.strip_prefix("goto ") {
            match name.trim() {
                "register" => wizard.switch_to(AuthStep::Register),
                "login" => wizard.switch_to(AuthStep::Login),
                "request-verify" => wizard.switch_to(AuthStep::RequestVerify),
                "verify-account" => wizard.switch_to(AuthStep::VerifyAccount),
                "forgot-password" => wizard.switch_to(AuthStep::ForgotPassword),
                "reset-password" => wizard.switch_to(AuthStep::ResetPassword),
                other => println!("Unknown step: {other}"),
            }
            return Some(Some(WizardEffect::Stay));
        }
        match input {
            "home" => Some(Some(WizardEffect::NavigateHome)),
            "q" => Some(None),
            _ => None,
        }
    }

    async fn step_register(
        &mut self,
        wizard: &mut AuthWizard,
    ) -> anyhow::Result<Option<WizardEffect>> {
        let mut form = RegisterForm::new();
        form.name = self.prompt.line("name").await?;
        if let Some(handled) = Self::step_command(wizard, &form.name) {
            return Ok(handled);
        }
        form.email = self.prompt.line("email").await?;
        form.password = self.prompt.line("password").await?;
        form.confirm_password = self.prompt.line("confirm password").await?;

        match form.submit(&self.auth_gateway).await {
            Ok((email, identity)) => {
                println!("Account created for {}. Please sign in.", identity.email);
                Ok(Some(wizard.registration_succeeded(email)))
            }
            Err(err) => {
                println!("{}", err.user_message());
                Ok(Some(WizardEffect::Stay))
            }
        }
    }

    async fn step_login(
        &mut self,
        wizard: &mut AuthWizard,
    ) -> anyhow::Result<Option<WizardEffect>> {
        let mut form = LoginForm::new();
        match wizard.pending_email() {
            Some(email) => {
                form.email = email.as_str().to_string();
                println!("Signing in as {}", form.email);
            }
            None => {
                form.email = self.prompt.line("email").await?;
                if let Some(handled) = Self::step_command(wizard, &form.email) {
                    return Ok(handled);
                }
            }
        }
        form.password = self.prompt.line("password").await?;

        match form.submit(&self.auth_gateway).await {
            Ok(login) => {
                let verified = login.identity.verified;
                println!("Welcome back, {}.", login.identity.name);
                self.session.login(login).await;
                if !verified {
                    println!("Your account is not verified yet.");
                }
                Ok(Some(wizard.login_succeeded(verified)))
            }
            Err(err) => {
                println!("{}", err.user_message());
                // Drop any prefilled email so the next attempt asks again
                wizard.switch_to(AuthStep::Login);
                Ok(Some(WizardEffect::Stay))
            }
        }
    }

    async fn step_request_verify(
        &mut self,
        wizard: &mut AuthWizard,
    ) -> anyhow::Result<Option<WizardEffect>> {
        let input = self.prompt.line("press enter to send a code").await?;
        if let Some(handled) = Self::step_command(wizard, &input) {
            return Ok(handled);
        }

        let mut form = RequestVerifyForm::new();
        match form.submit(&self.auth_gateway).await {
            Ok(message) => {
                println!("{message}");
                Ok(Some(wizard.verify_code_sent()))
            }
            Err(err) => {
                println!("{}", err.user_message());
                Ok(Some(WizardEffect::Stay))
            }
        }
    }

    async fn step_verify_account(
        &mut self,
        wizard: &mut AuthWizard,
    ) -> anyhow::Result<Option<WizardEffect>> {
        let mut form = VerifyAccountForm::new();
        form.otp = self.prompt.line("code (or 'resend')").await?;
        if let Some(handled) = Self::step_command(wizard, &form.otp) {
            return Ok(handled);
        }
        if form.otp == "resend" {
            match form.resend(&self.auth_gateway).await {
                Ok(message) => println!("{message}"),
                Err(err) => println!("{}", err.user_message()),
            }
            return Ok(Some(WizardEffect::Stay));
        }

        match form.submit(&self.auth_gateway).await {
            Ok(message) => {
                println!("{message}");
                self.session.update_identity(Identity::mark_verified);
                Ok(Some(wizard.verification_succeeded()))
            }
            Err(err) => {
                println!("{}", err.user_message());
                Ok(Some(WizardEffect::Stay))
            }
        }
    }

    async fn step_forgot_password(
        &mut self,
        wizard: &mut AuthWizard,
    ) -> anyhow::Result<Option<WizardEffect>> {
        let mut form = ForgotPasswordForm::new();
        form.email = self.prompt.line("email").await?;
        if let Some(handled) = Self::step_command(wizard, &form.email) {
            return Ok(handled);
        }

        match form.submit(&self.auth_gateway).await {
            Ok((email, message)) => {
                println!("{message}");
                Ok(Some(wizard.reset_code_sent(email)))
            }
            Err(err) => {
                println!("{}", err.user_message());
                Ok(Some(WizardEffect::Stay))
            }
        }
    }

    async fn step_reset_password(
        &mut self,
        wizard: &mut AuthWizard,
    ) -> anyhow::Result<Option<WizardEffect>> {
        let mut form = ResetPasswordForm::new(wizard.pending_email(), &self.auth_config);
        if form.email.is_empty() {
            form.email = self.prompt.line("email").await?;
            if let Some(handled) = Self::step_command(wizard, &form.email) {
                return Ok(handled);
            }
        } else {
            println!("Resetting password for {}", form.email);
        }

        form.otp = self.prompt.line("code (or 'resend')").await?;
        if let Some(handled) = Self::step_command(wizard, &form.otp) {
            return Ok(handled);
        }
        if form.otp == "resend" {
            match form.resend(&self.auth_gateway).await {
                Ok(message) => println!("{message}"),
                Err(err) => println!("{}", err.user_message()),
            }
            return Ok(Some(WizardEffect::Stay));
        }

        form.password = self.prompt.line("new password").await?;
        form.confirm_password = self.prompt.line("confirm password").await?;

        match form.submit(&self.auth_gateway).await {
            Ok(message) => {
                println!("{message}");
                Ok(Some(wizard.reset_succeeded()))
            }
            Err(err) => {
                println!("{}", err.user_message());
                Ok(Some(WizardEffect::Stay))
            }
        }
    }

    // --------------------------------------------------------
    // Protected views
    // --------------------------------------------------------

    async fn dashboard(&mut self) -> anyhow::Result<bool> {
        println!("\n== Dashboard ==");
        let page: u32 = self
            .prompt
            .line_or("page", "1")
            .await?
            .parse()
            .unwrap_or(1);
        let search = self.prompt.line("search (optional)").await?;

        let query = UserQuery {
            page: Some(page),
            limit: Some(20),
            search: (!search.is_empty()).then_some(search),
        };
        match self.catalog_gateway.users(&query).await {
            Ok(users) => {
                for user in &users.items {
                    println!("  #{}  {} <{}>  {}", user.id, user.name, user.email, user.role);
                }
                println!(
                    "page {}/{} ({} users)",
                    users.meta.page,
                    users.meta.page_count(),
                    users.meta.total
                );
            }
            Err(err) => println!("{}", err.user_message()),
        }

        let input = self.prompt.line("user id to inspect (or enter)").await?;
        if let Ok(id) = input.parse::<i64>() {
            match self.catalog_gateway.user(UserId::from_raw(id)).await {
                Ok(user) => println!(
                    "  {} <{}>  role={} verified={} since {}",
                    user.name,
                    user.email,
                    user.role,
                    user.is_verified,
                    member_since(user.created_at)
                ),
                Err(err) => println!("{}", err.user_message()),
            }
        }
        self.route = Route::Home;
        Ok(true)
    }

    async fn profile(&mut self) -> anyhow::Result<bool> {
        println!("\n== Profile ==");
        match self.catalog_gateway.me().await {
            Ok(profile) => println!(
                "{} <{}>  role={} verified={} since {}",
                profile.name,
                profile.email,
                profile.role,
                profile.is_verified,
                member_since(profile.created_at)
            ),
            Err(err) => println!("{}", err.user_message()),
        }

        if self.prompt.line("change password? (y/N)").await? == "y" {
            let mut form = ChangePasswordForm::new();
            form.current_password = self.prompt.line("current password").await?;
            form.new_password = self.prompt.line("new password").await?;
            form.confirm_password = self.prompt.line("confirm password").await?;
            match form.submit(&self.auth_gateway).await {
                Ok(message) => println!("{message}"),
                Err(err) => println!("{}", err.user_message()),
            }
        }
        self.route = Route::Home;
        Ok(true)
    }

    async fn shop_onboarding(&mut self) -> anyhow::Result<bool> {
        println!("\n== Shops ==");
        let input = self.prompt.line("shop id to view (or enter to open one)").await?;
        if let Ok(id) = input.parse::<i64>() {
            match self.catalog_gateway.shop(ShopId::from_raw(id)).await {
                Ok(shop) => println!(
                    "  #{} \"{}\" <{}>  {}",
                    shop.id,
                    shop.name,
                    shop.email,
                    shop.description.as_deref().unwrap_or("(no description)")
                ),
                Err(err) => println!("{}", err.user_message()),
            }
            self.route = Route::Home;
            return Ok(true);
        }

        println!("\n== Open a shop ==");
        let mut form = ShopOnboardingForm::new();
        form.name = self.prompt.line("shop name").await?;
        form.email = self.prompt.line("shop email").await?;
        form.description = self.prompt.line("description").await?;
        form.logo_url = self.prompt.line("logo URL (optional)").await?;

        match form.submit(&self.catalog_gateway).await {
            Ok(shop) => println!("Shop #{} \"{}\" registered.", shop.id, shop.name),
            Err(err) => println!("{}", err.user_message()),
        }
        self.route = Route::Home;
        Ok(true)
    }

    async fn seller(&mut self) -> anyhow::Result<bool> {
        println!("\n== New product ==");
        let mut form = ProductListingForm::new();
        form.title = self.prompt.line("title").await?;
        form.price = self.prompt.line("price").await?;
        form.stock = self.prompt.line("stock (optional)").await?;
        form.description = self.prompt.line("description (optional)").await?;

        while form.can_attach_image() {
            let path = self.prompt.line("image path (or enter to finish)").await?;
            if path.is_empty() {
                break;
            }
            match load_image(&path).await {
                Ok(image) => form.images.push(image),
                Err(err) => println!("Skipping {path}: {err}"),
            }
        }

        match form.submit(&self.catalog_gateway).await {
            Ok(product) => println!("Product #{} \"{}\" created.", product.id, product.title),
            Err(err) => println!("{}", err.user_message()),
        }
        self.route = Route::Home;
        Ok(true)
    }
}

/// Signup timestamp for display; list endpoints omit it
fn member_since<T: std::fmt::Display>(created_at: Option<T>) -> String {
    created_at.map_or_else(|| "unknown".to_string(), |t| t.to_string())
}

/// Read an image off disk, inferring the MIME type from the extension
async fn load_image(path: &str) -> anyhow::Result<ImageUpload> {
    let content_type = match path.rsplit('.').next().map(str::to_ascii_lowercase) {
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        Some(ext) if ext == "webp" => "image/webp",
        Some(ext) if ext == "gif" => "image/gif",
        _ => anyhow::bail!("unsupported image extension"),
    };
    let bytes = tokio::fs::read(path).await?;
    let file_name = path.rsplit('/').next().unwrap_or(path).to_string();
    Ok(ImageUpload {
        file_name,
        content_type: content_type.to_string(),
        bytes,
    })
}
