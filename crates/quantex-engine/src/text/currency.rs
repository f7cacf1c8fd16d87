//! Currency markers: symbols stripped during preprocessing, ISO 4217 codes
//! removed when they stand alone, and currency words the annotator treats as MONEY.

use rustc_hash::FxHashSet;

/// Currency symbols removed from text before extraction.
pub const CURRENCY_SYMBOLS: &[char] = &[
    '$', '£', '€', '¥', '₹', '₩', '₽', '₺', '₦', '₱', '₫', '฿', '₴', '₪', '₵', '₡', '¢',
];

/// Words that mark an adjacent number as money.
pub const CURRENCY_WORDS: &[&str] = &[
    "dollar", "dollars", "usd", "euro", "euros", "eur", "pound", "pounds", "sterling", "gbp",
    "yen", "yuan", "renminbi", "rupee", "rupees", "inr", "peso", "pesos", "franc", "francs",
    "naira", "shilling", "shillings", "reais", "ringgit", "baht", "taka", "rupiah", "lira",
];

pub fn is_currency_symbol(c: char) -> bool {
    CURRENCY_SYMBOLS.contains(&c)
}

pub fn is_currency_word(word: &str) -> bool {
    CURRENCY_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word))
}

/// Decides whether a three-letter token is a currency code.
pub trait CurrencyValidator: Send + Sync {
    fn is_currency_code(&self, code: &str) -> bool;
}

/// Active ISO 4217 alphabetic codes.
const ISO_4217_CODES: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN", "BAM", "BBD", "BDT",
    "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BRL", "BSD", "BTN", "BWP", "BYN", "BZD", "CAD",
    "CDF", "CHF", "CLP", "CNY", "COP", "CRC", "CUP", "CVE", "CZK", "DJF", "DKK", "DOP", "DZD",
    "EGP", "ERN", "ETB", "EUR", "FJD", "FKP", "GBP", "GEL", "GHS", "GIP", "GMD", "GNF", "GTQ",
    "GYD", "HKD", "HNL", "HTG", "HUF", "IDR", "ILS", "INR", "IQD", "IRR", "ISK", "JMD", "JOD",
    "JPY", "KES", "KGS", "KHR", "KMF", "KPW", "KRW", "KWD", "KYD", "KZT", "LAK", "LBP", "LKR",
    "LRD", "LSL", "LYD", "MAD", "MDL", "MGA", "MKD", "MMK", "MNT", "MOP", "MRU", "MUR", "MVR",
    "MWK", "MXN", "MYR", "MZN", "NAD", "NGN", "NIO", "NOK", "NPR", "NZD", "OMR", "PAB", "PEN",
    "PGK", "PHP", "PKR", "PLN", "PYG", "QAR", "RON", "RSD", "RUB", "RWF", "SAR", "SBD", "SCR",
    "SDG", "SEK", "SGD", "SHP", "SLE", "SOS", "SRD", "SSP", "STN", "SVC", "SYP", "SZL", "THB",
    "TJS", "TMT", "TND", "TOP", "TRY", "TTD", "TWD", "TZS", "UAH", "UGX", "USD", "UYU", "UZS",
    "VES", "VND", "VUV", "WST", "XAF", "XCD", "XOF", "XPF", "YER", "ZAR", "ZMW", "ZWL",
];

/// Lookup against the ISO 4217 code list. Case-sensitive: codes are uppercase.
#[derive(Debug, Clone)]
pub struct Iso4217 {
    codes: FxHashSet<&'static str>,
}

impl Iso4217 {
    pub fn new() -> Self {
        Self {
            codes: ISO_4217_CODES.iter().copied().collect(),
        }
    }
}

impl Default for Iso4217 {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencyValidator for Iso4217 {
    fn is_currency_code(&self, code: &str) -> bool {
        self.codes.contains(code)
    }
}
