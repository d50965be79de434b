//! Value Objects
//!
//! Validated input types. Construction is the validation: a value of
//! one of these types has already passed the client-side schema, so a
//! request built from them never carries locally-invalid data.

pub mod display_name;
pub mod email;
pub mod otp_code;
pub mod password;

pub use display_name::DisplayName;
pub use email::Email;
pub use otp_code::OtpCode;
pub use password::RawPassword;
