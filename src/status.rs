//! Known Guilded API status codes
//!
//! The code table and the [`GuildedStatusCode`] enum are generated from the
//! same macro invocation, so the enum is always exactly the key-set of the
//! table and cannot drift from it.

/// Defines `GUILDED_STATUS_CODES` and `GuildedStatusCode` from one entry list.
macro_rules! guilded_status_codes {
    ($($variant:ident = $code:literal => $desc:literal),+ $(,)?) => {
        /// The known status codes the Guilded API can respond with, and what
        /// each of them means.
        pub const GUILDED_STATUS_CODES: &[(u16, &str)] = &[$(($code, $desc),)+];

        /// The known status codes that the Guilded API can respond with
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum GuildedStatusCode {
            $($variant = $code,)+
        }

        impl GuildedStatusCode {
            /// Every known status code, in table order
            pub const ALL: &'static [GuildedStatusCode] = &[$(GuildedStatusCode::$variant,)+];

            /// Look up a known status code by its numeric value
            pub fn from_code(code: u16) -> Option<Self> {
                match code {
                    $($code => Some(GuildedStatusCode::$variant),)+
                    _ => None,
                }
            }

            /// The numeric status code
            pub fn code(&self) -> u16 {
                *self as u16
            }

            /// Guilded's documented meaning for this status code
            pub fn description(&self) -> &'static str {
                match self {
                    $(GuildedStatusCode::$variant => $desc,)+
                }
            }

            /// Whether this code indicates the request succeeded
            pub fn is_success(&self) -> bool {
                self.code() < 400
            }
        }
    };
}

guilded_status_codes! {
    Ok = 200 => "The request was successful",
    Created = 201 => "The content was created",
    NoContent = 204 => "No content returned",
    BadRequest = 400 => "The request was unacceptable, often due to a missing or malformed parameter",
    Unauthorized = 401 => "The access token is missing or invalid",
    Forbidden = 403 => "The bot does not have the necessary permissions",
    NotFound = 404 => "The requested resource does not exist",
    Conflict = 409 => "The request conflicted with the current state of the target resource",
    TooManyRequests = 429 => "Too many requests were sent in a given amount of time",
    InternalServerError = 500 => "Something went wrong on Guilded's end",
    NotImplemented = 501 => "Something went wrong on Guilded's end",
    ServiceUnavailable = 503 => "Something went wrong on Guilded's end",
}
