//! Synthetic billing client generation.
//!
//! Generation is a pure function of an [`Rng`] and a user id, so a seeded
//! generator reproduces the same batch. The company/individual split and the
//! chance of carrying a note are explicit [`ClientGenerator`] parameters.

use atelier_core::status::ClientType;
use atelier_core::types::UserId;
use atelier_db::models::client::NewClient;
use rand::Rng;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Every generated client is billed in France.
pub const BILLING_COUNTRY: &str = "France";

/// Default probability that a client is a company.
pub const DEFAULT_COMPANY_PROBABILITY: f64 = 0.5;

/// Default probability that a client carries a free-text note.
pub const DEFAULT_NOTE_PROBABILITY: f64 = 0.3;

const FIRST_NAMES: &[&str] = &[
    "Camille", "Léa", "Manon", "Chloé", "Inès", "Jade", "Louise", "Zoé", "Élodie", "Margaux",
    "Lucas", "Hugo", "Louis", "Gabriel", "Arthur", "Jules", "Théo", "Raphaël", "Maël", "Noé",
];

const LAST_NAMES: &[&str] = &[
    "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit", "Durand", "Leroy",
    "Moreau", "Simon", "Laurent", "Lefèvre", "Michel", "Garcia", "David", "Bertrand", "Roux",
    "Vincent", "Fournier", "Morel", "Girard", "André", "Mercier", "Dupont", "Lambert",
];

const COMPANY_SUFFIXES: &[&str] = &["SARL", "SA", "SAS", "EURL", "et Fils", "& Associés"];

const COMPANY_PREFIXES: &[&str] = &["Studio", "Atelier", "Maison", "Agence", "Boutique"];

const STREET_TYPES: &[&str] = &["rue", "avenue", "boulevard", "place", "impasse", "allée", "quai"];

const STREET_NAMES: &[&str] = &[
    "de la Paix", "Victor Hugo", "Jean Jaurès", "de la République", "Pasteur", "du Général de Gaulle",
    "des Lilas", "Gambetta", "Voltaire", "de la Liberté", "des Écoles", "du Moulin",
];

/// City and its département code (postal code prefix).
const CITIES: &[(&str, &str)] = &[
    ("Paris", "75"),
    ("Lyon", "69"),
    ("Marseille", "13"),
    ("Toulouse", "31"),
    ("Nice", "06"),
    ("Nantes", "44"),
    ("Strasbourg", "67"),
    ("Montpellier", "34"),
    ("Bordeaux", "33"),
    ("Lille", "59"),
    ("Rennes", "35"),
    ("Reims", "51"),
];

const EMAIL_DOMAINS: &[&str] = &["gmail.com", "orange.fr", "free.fr", "laposte.net", "yahoo.fr"];

/// French bank code and the BIC of that bank.
const BANKS: &[(&str, &str)] = &[
    ("30006", "AGRIFRPP"),
    ("30004", "BNPAFRPP"),
    ("30003", "SOGEFRPP"),
    ("30002", "CRLYFRPP"),
    ("10278", "CMCIFR2A"),
    ("20041", "PSSTFRPP"),
    ("17515", "CEPAFRPP"),
];

const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat",
];

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Parameters for synthetic client generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientGenerator {
    /// Probability in `[0, 1]` that a client is a company.
    pub company_probability: f64,
    /// Probability in `[0, 1]` that a client carries a note.
    pub note_probability: f64,
}

impl Default for ClientGenerator {
    fn default() -> Self {
        Self {
            company_probability: DEFAULT_COMPANY_PROBABILITY,
            note_probability: DEFAULT_NOTE_PROBABILITY,
        }
    }
}

impl ClientGenerator {
    /// Generate one client owned by `user_id`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, user_id: UserId) -> NewClient {
        let is_company = rng.random_bool(probability(
            self.company_probability,
            DEFAULT_COMPANY_PROBABILITY,
        ));
        let (city, departement) = CITIES[rng.random_range(0..CITIES.len())];
        let (bank_code, bic) = BANKS[rng.random_range(0..BANKS.len())];

        let (client_type, company_name, first_name, last_name) = if is_company {
            (ClientType::Company, Some(company_name(rng)), None, None)
        } else {
            let first = pick(rng, FIRST_NAMES).to_string();
            let last = pick(rng, LAST_NAMES).to_string();
            (ClientType::Individual, None, Some(first), Some(last))
        };

        let billing_email = match (&company_name, &first_name, &last_name) {
            (Some(company), _, _) => format!("contact@{}.fr", slugify(company)),
            (None, Some(first), Some(last)) => format!(
                "{}.{}{}@{}",
                slugify(first),
                slugify(last),
                rng.random_range(1..100),
                pick(rng, EMAIL_DOMAINS)
            ),
            _ => format!("client{}@{}", rng.random_range(1..10_000), pick(rng, EMAIL_DOMAINS)),
        };

        let (siret, tax_id) = if is_company {
            let siret = random_siret(rng);
            let tax_id = vat_number(&siret[..9]);
            (Some(siret), Some(tax_id))
        } else {
            (None, None)
        };

        let note_probability = probability(self.note_probability, DEFAULT_NOTE_PROBABILITY);
        let notes = if rng.random_bool(note_probability) {
            Some(lorem_paragraph(rng))
        } else {
            None
        };

        NewClient {
            user_id,
            client_type,
            company_name,
            first_name,
            last_name,
            billing_email,
            billing_phone: phone_number(rng),
            billing_address: format!(
                "{} {} {}",
                rng.random_range(1..200),
                pick(rng, STREET_TYPES),
                pick(rng, STREET_NAMES)
            ),
            billing_city: city.to_string(),
            billing_postal: format!("{departement}{:03}", rng.random_range(0..1000)),
            billing_country: BILLING_COUNTRY.to_string(),
            siret,
            tax_id,
            iban: random_iban(rng, bank_code),
            bic: bic.to_string(),
            notes,
        }
    }

    /// Generate `count` independent clients owned by `user_id`.
    pub fn generate_batch<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        user_id: UserId,
        count: usize,
    ) -> Vec<NewClient> {
        (0..count).map(|_| self.generate(rng, user_id)).collect()
    }
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

/// Clamp `p` into `[0, 1]`; NaN falls back to `default`.
fn probability(p: f64, default: f64) -> f64 {
    if p.is_nan() {
        default
    } else {
        p.clamp(0.0, 1.0)
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

fn company_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    if rng.random_bool(0.5) {
        format!("{} {}", pick(rng, LAST_NAMES), pick(rng, COMPANY_SUFFIXES))
    } else {
        format!("{} {}", pick(rng, COMPANY_PREFIXES), pick(rng, LAST_NAMES))
    }
}

/// `+33 6 12 34 56 78` style mobile or landline number.
fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let lead = [1, 2, 3, 4, 5, 6, 7, 9][rng.random_range(0..8)];
    format!(
        "+33 {lead} {:02} {:02} {:02} {:02}",
        rng.random_range(0..100),
        rng.random_range(0..100),
        rng.random_range(0..100),
        rng.random_range(0..100)
    )
}

/// Lowercase ASCII form of a name, suitable for an email local part or host.
fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    for c in value.chars().flat_map(char::to_lowercase) {
        let folded = match c {
            'à' | 'â' | 'ä' => 'a',
            'ç' => 'c',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            c if c.is_ascii_alphanumeric() => c,
            _ => '-',
        };
        if folded == '-' && (slug.is_empty() || slug.ends_with('-')) {
            continue;
        }
        slug.push(folded);
    }
    slug.trim_end_matches('-').to_string()
}

fn random_digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

/// 14-digit SIRET whose digits pass the Luhn check.
fn random_siret<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = char::from(b'0' + rng.random_range(1..10u8));
    let payload = format!("{first}{}", random_digits(rng, 12));
    let check = luhn_check_digit(&payload);
    format!("{payload}{check}")
}

/// Luhn check digit for a string of ASCII digits.
fn luhn_check_digit(payload: &str) -> u32 {
    let sum: u32 = payload
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    (10 - sum % 10) % 10
}

/// French intra-community VAT number (`FR` + 2-digit key + SIREN).
fn vat_number(siren: &str) -> String {
    let siren_value: u64 = siren.parse().unwrap_or(0);
    let key = (12 + 3 * (siren_value % 97)) % 97;
    format!("FR{key:02}{siren}")
}

/// French IBAN: `FR` + check digits + bank + branch + account + RIB key.
fn random_iban<R: Rng + ?Sized>(rng: &mut R, bank_code: &str) -> String {
    let branch = random_digits(rng, 5);
    let account = random_digits(rng, 11);
    let rib_key = rib_key(bank_code, &branch, &account);
    let bban = format!("{bank_code}{branch}{account}{rib_key:02}");
    format!("FR{}{bban}", iban_check_digits("FR", &bban))
}

/// RIB key over all-numeric bank, branch and account codes.
fn rib_key(bank: &str, branch: &str, account: &str) -> u64 {
    let bank: u64 = bank.parse().unwrap_or(0);
    let branch: u64 = branch.parse().unwrap_or(0);
    let account: u64 = account.parse().unwrap_or(0);
    97 - ((89 * bank + 15 * branch + 3 * account) % 97)
}

/// ISO 13616 check digits for `country` + `bban`.
fn iban_check_digits(country: &str, bban: &str) -> String {
    let rearranged = format!("{bban}{country}00");
    format!("{:02}", 98 - mod97(&rearranged))
}

/// Remainder modulo 97 of an alphanumeric string, letters counting A=10..Z=35.
fn mod97(value: &str) -> u32 {
    value.chars().fold(0, |rem, c| match c.to_digit(36) {
        Some(v) if v >= 10 => (rem * 100 + v) % 97,
        Some(v) => (rem * 10 + v) % 97,
        None => rem,
    })
}

fn lorem_paragraph<R: Rng + ?Sized>(rng: &mut R) -> String {
    let sentences: Vec<String> = (0..rng.random_range(3..7))
        .map(|_| {
            let words: Vec<&str> = (0..rng.random_range(5..13))
                .map(|_| pick(rng, LOREM))
                .collect();
            let mut sentence = words.join(" ");
            if let Some(first) = sentence.get(..1) {
                sentence.replace_range(..1, &first.to_uppercase());
            }
            sentence.push('.');
            sentence
        })
        .collect();
    sentences.join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
