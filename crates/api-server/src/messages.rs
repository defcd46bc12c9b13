//! Texts shown to the (Arabic) mobile client.

use domain::DomainError;

pub const REGISTER_SUCCESS: &str = "تم إنشاء الحساب بنجاح";
pub const LOGIN_SUCCESS: &str = "تم تسجيل الدخول بنجاح";
pub const DUPLICATE_EMAIL: &str = "البريد الإلكتروني مسجل مسبقاً، يرجى استخدام بريد إلكتروني آخر";
pub const DUPLICATE_PHONE: &str = "رقم الهاتف مسجل مسبقاً، يرجى استخدام رقم هاتف آخر";
pub const INVALID_CREDENTIALS: &str = "البريد الإلكتروني أو رقم الهاتف أو كلمة المرور غير صحيحة";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// The `detail` text for a failed request.
pub fn detail_for(error: &DomainError) -> String {
    match error {
        DomainError::DuplicateEmail(_) => DUPLICATE_EMAIL.to_string(),
        DomainError::DuplicatePhone(_) => DUPLICATE_PHONE.to_string(),
        DomainError::InvalidCredentials => INVALID_CREDENTIALS.to_string(),
        DomainError::Validation(reason) => reason.clone(),
        DomainError::Repository(_) => INTERNAL_ERROR.to_string(),
    }
}
