//! Required security header names.
//!
//! The order of the variants is the order used for evaluation, report display,
//! and the `missing_headers` document written to the database.

use strum_macros::EnumIter;

/// A security response header that every checked site is expected to send.
///
/// Iterate with `SecurityHeader::iter()` (from `strum::IntoEnumIterator`) to
/// walk the required set in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum SecurityHeader {
    /// `Content-Security-Policy`
    ContentSecurityPolicy,
    /// `Strict-Transport-Security`
    StrictTransportSecurity,
    /// `X-Content-Type-Options`
    XContentTypeOptions,
    /// `X-Frame-Options`
    XFrameOptions,
    /// `X-XSS-Protection`
    XXssProtection,
    /// `Referrer-Policy`
    ReferrerPolicy,
    /// `Permissions-Policy`
    PermissionsPolicy,
}

/// Number of headers in the required set.
pub const REQUIRED_HEADER_COUNT: usize = 7;

impl SecurityHeader {
    /// Canonical header name as it is displayed and stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityHeader::ContentSecurityPolicy => "Content-Security-Policy",
            SecurityHeader::StrictTransportSecurity => "Strict-Transport-Security",
            SecurityHeader::XContentTypeOptions => "X-Content-Type-Options",
            SecurityHeader::XFrameOptions => "X-Frame-Options",
            SecurityHeader::XXssProtection => "X-XSS-Protection",
            SecurityHeader::ReferrerPolicy => "Referrer-Policy",
            SecurityHeader::PermissionsPolicy => "Permissions-Policy",
        }
    }
}

impl std::fmt::Display for SecurityHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
