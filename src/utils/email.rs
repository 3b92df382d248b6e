//! 이메일 형식 검사
//!
//! RFC 5322 전체를 지원하지 않는 의도적으로 느슨한 문법입니다.
//!
//! ```text
//! email      = local-part "@" label *( "." label )
//! local-part = 1*( ALPHA / DIGIT / "." / "!" / "#" / "$" / "%" / "&" / "'" / "*"
//!                 / "+" / "/" / "=" / "?" / "^" / "_" / "`" / "{" / "|" / "}" / "~" / "-" )
//! label      = 1*( ALPHA / DIGIT / "-" )
//! ```
//!
//! 앞뒤 공백은 허용되지 않습니다.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$")
        .expect("email pattern is a valid regex")
});

/// 주어진 문자열이 이메일 문법에 맞는지 검사합니다.
///
/// 대소문자는 구분하지 않습니다.
pub fn is_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(&email.to_lowercase())
}

/// 저장용으로 이메일을 정규화합니다.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
