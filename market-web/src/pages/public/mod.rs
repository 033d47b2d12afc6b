//! Pages of the public layout.

pub mod about;
pub mod contact;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod marketplace;
pub mod reset_password;
pub mod signup;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use marketplace::MarketplacePage;
pub use reset_password::ResetPasswordPage;
pub use signup::SignupPage;
