//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{Claims, JwtService};
pub use password::{
    generate_reset_code, hash_password, is_password_hashed, reset_code_expiry, verify_password,
    PasswordService, RESET_CODE_TTL_SECS,
};
