use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of digits in a transaction PIN
pub const PIN_LENGTH: usize = 4;

/// Maximum length of the optional memo attached to a crypto send (characters)
pub const MAX_MEMO_LENGTH: usize = 140;

/// Smallest top-up accepted, in fiat units
pub const MIN_TOP_UP_AMOUNT: f64 = 1.0;

/// Largest top-up accepted in a single request, in fiat units
pub const MAX_TOP_UP_AMOUNT: f64 = 10_000.0;

/// Fiat currency used for top-ups
pub const TOP_UP_CURRENCY: &str = "USD";

/// Global overlays that can be opened from anywhere in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModalKind {
    /// PIN entry used to confirm sensitive actions
    PinEntry,
    /// Send crypto to an external address
    SendCrypto,
    /// Show a deposit address for receiving crypto
    ReceiveCrypto,
    /// Top up the fiat balance
    TopUp,
}

impl ModalKind {
    /// Every modal kind, in display order
    pub const ALL: [ModalKind; 4] = [
        ModalKind::PinEntry,
        ModalKind::SendCrypto,
        ModalKind::ReceiveCrypto,
        ModalKind::TopUp,
    ];

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            ModalKind::PinEntry => "PIN entry",
            ModalKind::SendCrypto => "Send crypto",
            ModalKind::ReceiveCrypto => "Receive crypto",
            ModalKind::TopUp => "Top up",
        }
    }
}

impl fmt::Display for ModalKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Crypto assets the wallet can send and receive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CryptoAsset {
    Bitcoin,
    Ethereum,
    /// USDT on the Ethereum network (ERC-20)
    Tether,
}

impl CryptoAsset {
    pub const ALL: [CryptoAsset; 3] = [CryptoAsset::Bitcoin, CryptoAsset::Ethereum, CryptoAsset::Tether];

    /// Ticker symbol shown next to amounts
    pub fn symbol(&self) -> &'static str {
        match self {
            CryptoAsset::Bitcoin => "BTC",
            CryptoAsset::Ethereum => "ETH",
            CryptoAsset::Tether => "USDT",
        }
    }

    /// Network the asset is transferred on
    pub fn network(&self) -> &'static str {
        match self {
            CryptoAsset::Bitcoin => "Bitcoin",
            CryptoAsset::Ethereum | CryptoAsset::Tether => "Ethereum (ERC-20)",
        }
    }

    /// Check that `address` is plausibly an address on this asset's network.
    ///
    /// This is a shape check only (prefix, length, alphabet). Checksums are
    /// verified by the API when the request is processed.
    pub fn validate_address(&self, address: &str) -> Result<(), ValidationError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ValidationError::EmptyAddress);
        }

        let valid = match self {
            CryptoAsset::Bitcoin => is_bitcoin_address(address),
            CryptoAsset::Ethereum | CryptoAsset::Tether => is_ethereum_address(address),
        };

        if valid {
            Ok(())
        } else {
            Err(ValidationError::InvalidAddress { asset: *self })
        }
    }
}

impl fmt::Display for CryptoAsset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

fn is_bitcoin_address(address: &str) -> bool {
    const BASE58: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
    const BECH32: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

    let lower = address.to_ascii_lowercase();
    if let Some(data) = lower.strip_prefix("bc1") {
        // Mixed case is not allowed in bech32
        let single_case = address == lower || address == address.to_ascii_uppercase();
        return single_case
            && (11..=71).contains(&data.len())
            && data.chars().all(|c| BECH32.contains(c));
    }

    (address.starts_with('1') || address.starts_with('3'))
        && (26..=35).contains(&address.len())
        && address.chars().all(|c| BASE58.contains(c))
}

fn is_ethereum_address(address: &str) -> bool {
    match address.strip_prefix("0x").or_else(|| address.strip_prefix("0X")) {
        Some(hex) => hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Input validation failures shown next to form fields
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter an amount")]
    EmptyAmount,
    #[error("Please enter a valid number")]
    InvalidAmount,
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,
    #[error("Amount must be between {min:.2} and {max:.2}")]
    AmountOutOfRange { min: f64, max: f64 },
    #[error("Please enter a recipient address")]
    EmptyAddress,
    #[error("That isn't a valid {asset} address")]
    InvalidAddress { asset: CryptoAsset },
    #[error("Memo is too long ({length}/{max} characters)")]
    MemoTooLong { length: usize, max: usize },
    #[error("PIN must be exactly {expected} digits")]
    MalformedPin { expected: usize },
}

/// Parse a user-entered amount.
///
/// Accepts an optional leading `$` and thousands separators.
pub fn parse_amount(input: &str) -> Result<f64, ValidationError> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    if cleaned.is_empty() {
        return Err(ValidationError::EmptyAmount);
    }

    let amount: f64 = cleaned.parse().map_err(|_| ValidationError::InvalidAmount)?;
    if !amount.is_finite() {
        return Err(ValidationError::InvalidAmount);
    }
    if amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount);
    }

    Ok(amount)
}

/// Validate a memo and normalize it (blank memos become `None`)
pub fn validate_memo(memo: &str) -> Result<Option<String>, ValidationError> {
    let memo = memo.trim();
    let length = memo.chars().count();
    if length > MAX_MEMO_LENGTH {
        return Err(ValidationError::MemoTooLong { length, max: MAX_MEMO_LENGTH });
    }
    Ok(if memo.is_empty() { None } else { Some(memo.to_string()) })
}

fn new_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Request to send crypto to an external address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendCryptoRequest {
    /// Client-generated idempotency key (UUID v4)
    pub request_id: String,
    pub asset: CryptoAsset,
    /// Recipient address on the asset's network
    pub recipient: String,
    /// Amount in units of `asset`
    pub amount: f64,
    pub memo: Option<String>,
    /// When the user submitted the form (RFC 3339)
    pub requested_at: String,
}

impl SendCryptoRequest {
    /// Build a request from raw form input, validating every field
    pub fn from_form(
        asset: CryptoAsset,
        recipient: &str,
        amount: &str,
        memo: &str,
    ) -> Result<Self, ValidationError> {
        asset.validate_address(recipient)?;
        let amount = parse_amount(amount)?;
        let memo = validate_memo(memo)?;

        Ok(Self {
            request_id: new_request_id(),
            asset,
            recipient: recipient.trim().to_string(),
            amount,
            memo,
            requested_at: now_rfc3339(),
        })
    }
}

/// Request to top up the fiat balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopUpRequest {
    /// Client-generated idempotency key (UUID v4)
    pub request_id: String,
    pub amount: f64,
    /// ISO 4217 currency code
    pub currency: String,
    /// When the user submitted the form (RFC 3339)
    pub requested_at: String,
}

impl TopUpRequest {
    /// Build a request from raw form input
    pub fn from_form(amount: &str) -> Result<Self, ValidationError> {
        let amount = parse_amount(amount)?;
        if !(MIN_TOP_UP_AMOUNT..=MAX_TOP_UP_AMOUNT).contains(&amount) {
            return Err(ValidationError::AmountOutOfRange {
                min: MIN_TOP_UP_AMOUNT,
                max: MAX_TOP_UP_AMOUNT,
            });
        }

        Ok(Self {
            request_id: new_request_id(),
            amount,
            currency: TOP_UP_CURRENCY.to_string(),
            requested_at: now_rfc3339(),
        })
    }
}

/// A validated transaction PIN
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinSubmission {
    pin: String,
}

impl PinSubmission {
    /// Validate raw PIN input: exactly `PIN_LENGTH` ASCII digits
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.len() == PIN_LENGTH && input.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self { pin: input.to_string() })
        } else {
            Err(ValidationError::MalformedPin { expected: PIN_LENGTH })
        }
    }

    /// The PIN digits, for the API client only
    pub fn expose(&self) -> &str {
        &self.pin
    }
}

impl fmt::Debug for PinSubmission {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PinSubmission").field("pin", &"****").finish()
    }
}

/// A PIN-confirmed wallet action waiting to be sent to the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WalletRequest {
    Send { request: SendCryptoRequest, pin: PinSubmission },
    TopUp { request: TopUpRequest, pin: PinSubmission },
}

impl WalletRequest {
    pub fn request_id(&self) -> &str {
        match self {
            WalletRequest::Send { request, .. } => &request.request_id,
            WalletRequest::TopUp { request, .. } => &request.request_id,
        }
    }

    /// One-line summary for lists and logs (never includes the PIN)
    pub fn summary(&self) -> String {
        match self {
            WalletRequest::Send { request, .. } => format!(
                "Send {} {} to {}",
                format_crypto_amount(request.amount),
                request.asset.symbol(),
                shorten_address(&request.recipient)
            ),
            WalletRequest::TopUp { request, .. } => {
                format!("Top up ${:.2} {}", request.amount, request.currency)
            }
        }
    }
}

/// Format a crypto amount with up to 8 decimals and no trailing zeros
pub fn format_crypto_amount(amount: f64) -> String {
    let formatted = format!("{:.8}", amount);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

/// Shorten a long address to `head…tail` for display
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 14 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ETH_ADDRESS: &str = "0x52908400098527886E0F7030069857D2E4169EE7";
    const BTC_BECH32: &str = "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq";
    const BTC_LEGACY: &str = "1BoatSLRHtKNngkdXEeobR76b53LETtpyT";

    #[test]
    fn test_modal_kind_labels() {
        assert_eq!(ModalKind::ALL.len(), 4);
        assert_eq!(ModalKind::PinEntry.to_string(), "PIN entry");
        assert_eq!(ModalKind::TopUp.label(), "Top up");
    }

    #[test]
    fn test_bitcoin_address_validation() {
        assert!(CryptoAsset::Bitcoin.validate_address(BTC_BECH32).is_ok());
        assert!(CryptoAsset::Bitcoin.validate_address(BTC_LEGACY).is_ok());
        assert!(CryptoAsset::Bitcoin.validate_address(&BTC_BECH32.to_uppercase()).is_ok());

        // Ethereum address on the Bitcoin network
        assert_eq!(
            CryptoAsset::Bitcoin.validate_address(ETH_ADDRESS),
            Err(ValidationError::InvalidAddress { asset: CryptoAsset::Bitcoin })
        );

        // Mixed case bech32
        assert!(CryptoAsset::Bitcoin
            .validate_address("bc1Qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq")
            .is_err());

        // Base58 excludes 0, O, I and l
        assert!(CryptoAsset::Bitcoin
            .validate_address("1BoatSLRHtKNngkdXEeobR76b53LETtpy0")
            .is_err());
    }

    #[test]
    fn test_ethereum_address_validation() {
        assert!(CryptoAsset::Ethereum.validate_address(ETH_ADDRESS).is_ok());
        assert!(CryptoAsset::Tether.validate_address(ETH_ADDRESS).is_ok());
        assert!(CryptoAsset::Ethereum.validate_address(&format!("  {}  ", ETH_ADDRESS)).is_ok());

        assert!(CryptoAsset::Ethereum.validate_address(BTC_BECH32).is_err());
        assert!(CryptoAsset::Ethereum.validate_address("0x1234").is_err());
        assert!(CryptoAsset::Ethereum
            .validate_address("0xZZ908400098527886E0F7030069857D2E4169EE7")
            .is_err());
        assert_eq!(
            CryptoAsset::Ethereum.validate_address("   "),
            Err(ValidationError::EmptyAddress)
        );

        let error = CryptoAsset::Tether.validate_address("0x1234").unwrap_err();
        assert_eq!(error.to_string(), "That isn't a valid USDT address");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5"), Ok(12.5));
        assert_eq!(parse_amount(" $1,250.00 "), Ok(1250.0));
        assert_eq!(parse_amount(""), Err(ValidationError::EmptyAmount));
        assert_eq!(parse_amount("abc"), Err(ValidationError::InvalidAmount));
        assert_eq!(parse_amount("inf"), Err(ValidationError::InvalidAmount));
        assert_eq!(parse_amount("0"), Err(ValidationError::NonPositiveAmount));
        assert_eq!(parse_amount("-3"), Err(ValidationError::NonPositiveAmount));
    }

    #[test]
    fn test_validate_memo() {
        assert_eq!(validate_memo("   "), Ok(None));
        assert_eq!(validate_memo(" rent ").unwrap(), Some("rent".to_string()));

        let long = "x".repeat(MAX_MEMO_LENGTH + 1);
        assert_eq!(
            validate_memo(&long),
            Err(ValidationError::MemoTooLong { length: MAX_MEMO_LENGTH + 1, max: MAX_MEMO_LENGTH })
        );
    }

    #[test]
    fn test_send_request_from_form() {
        let request = SendCryptoRequest::from_form(CryptoAsset::Ethereum, ETH_ADDRESS, "0.25", "").unwrap();
        assert_eq!(request.asset, CryptoAsset::Ethereum);
        assert_eq!(request.amount, 0.25);
        assert_eq!(request.memo, None);
        assert!(uuid::Uuid::parse_str(&request.request_id).is_ok());
        assert!(chrono::DateTime::parse_from_rfc3339(&request.requested_at).is_ok());

        // Address is checked before the amount
        assert_eq!(
            SendCryptoRequest::from_form(CryptoAsset::Bitcoin, ETH_ADDRESS, "", ""),
            Err(ValidationError::InvalidAddress { asset: CryptoAsset::Bitcoin })
        );
        assert_eq!(
            SendCryptoRequest::from_form(CryptoAsset::Bitcoin, BTC_LEGACY, "", ""),
            Err(ValidationError::EmptyAmount)
        );
    }

    #[test]
    fn test_top_up_request_range() {
        let request = TopUpRequest::from_form("50").unwrap();
        assert_eq!(request.amount, 50.0);
        assert_eq!(request.currency, "USD");

        let out_of_range = ValidationError::AmountOutOfRange {
            min: MIN_TOP_UP_AMOUNT,
            max: MAX_TOP_UP_AMOUNT,
        };
        assert_eq!(TopUpRequest::from_form("0.50"), Err(out_of_range.clone()));
        assert_eq!(TopUpRequest::from_form("10000.01"), Err(out_of_range));
        assert!(TopUpRequest::from_form("10000").is_ok());
    }

    #[test]
    fn test_pin_parsing() {
        assert_eq!(PinSubmission::parse("0420").unwrap().expose(), "0420");

        let malformed = Err(ValidationError::MalformedPin { expected: PIN_LENGTH });
        assert_eq!(PinSubmission::parse("123"), malformed);
        assert_eq!(PinSubmission::parse("12345"), malformed);
        assert_eq!(PinSubmission::parse("12a4"), malformed);
        assert_eq!(PinSubmission::parse("١٢٣٤"), malformed);
    }

    #[test]
    fn test_pin_debug_is_redacted() {
        let pin = PinSubmission::parse("9876").unwrap();
        let debug = format!("{:?}", pin);
        assert!(!debug.contains("9876"));

        let request = WalletRequest::TopUp { request: TopUpRequest::from_form("20").unwrap(), pin };
        assert!(!format!("{:?}", request).contains("9876"));
        assert!(!request.summary().contains("9876"));
    }

    #[test]
    fn test_wallet_request_serialization_tag() {
        let request = SendCryptoRequest::from_form(CryptoAsset::Bitcoin, BTC_BECH32, "0.001", "gift").unwrap();
        let wallet_request = WalletRequest::Send {
            request: request.clone(),
            pin: PinSubmission::parse("1234").unwrap(),
        };

        let json = serde_json::to_value(&wallet_request).unwrap();
        assert_eq!(json["type"], "send");
        assert_eq!(json["request"]["asset"], "Bitcoin");
        assert_eq!(wallet_request.request_id(), request.request_id);
    }

    #[test]
    fn test_summary_formatting() {
        let request = SendCryptoRequest::from_form(CryptoAsset::Bitcoin, BTC_BECH32, "0.00150000", "").unwrap();
        let summary = WalletRequest::Send { request, pin: PinSubmission::parse("1234").unwrap() }.summary();
        assert_eq!(summary, "Send 0.0015 BTC to bc1qar…5mdq");

        assert_eq!(format_crypto_amount(2.0), "2");
        assert_eq!(shorten_address("short"), "short");
    }
}
