use serde::{Deserialize, Serialize};

/// Fixed shop details stamped on every invoice.
///
/// Supplied once when an invoice is created and never edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub company_name: String,
    pub company_address: String,
    pub office_address: String,
    pub company_phone: String,
    pub company_email: String,
    pub copyright: String,
    /// Closing message printed under the totals.
    pub notes: String,
    pub currency_symbol: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            company_name: "BANGA'S NATION".to_string(),
            company_address: "DEALERS IN ALL KIND OF GREASE AND LUBRICANT".to_string(),
            office_address: "God's Own Plaza, Shop 4, Aspmda Int'l Trade Fair Complex, \
                             Badagry Expressway, Ojo, Lagos."
                .to_string(),
            company_phone: "Tel: 07062669725, 09127208080".to_string(),
            company_email: "eobumkaneme@gmail.com".to_string(),
            copyright: "© Created by Codivora Solutions 2025".to_string(),
            // The shop's app ended this message with a stray space; it is
            // dropped so the share text has no trailing whitespace.
            notes: "Thank you for your business!".to_string(),
            currency_symbol: "₦".to_string(),
        }
    }
}
