use tracing::debug;

use super::lines::Line;
use super::tags::has_company_suffix;
use super::vocab::FREE_MAIL_DOMAINS;

/// Longest line carrying a company suffix, whether or not another zone
/// already claimed it; otherwise a name derived from the email domain.
pub fn resolve(lines: &[Line], email: Option<&str>) -> Option<String> {
    let best = lines
        .iter()
        .filter(|l| has_company_suffix(&l.text))
        .fold(None::<&Line>, |best, line| match best {
            Some(b) if b.char_len() >= line.char_len() => Some(b),
            _ => Some(line),
        });

    if let Some(line) = best {
        debug!(line = line.index, "company from suffix");
        return Some(line.text.clone());
    }

    let derived = email.and_then(from_email_domain);
    if let Some(name) = &derived {
        debug!(company = %name, "company from email domain");
    }
    derived
}

/// `jane@acme.co.uk` -> `Acme`. Free-mail domains yield nothing.
fn from_email_domain(email: &str) -> Option<String> {
    let domain = email.rsplit('@').next()?;
    let label = domain.split('.').next()?;
    if label.is_empty() || FREE_MAIL_DOMAINS.contains(&label.to_lowercase().as_str()) {
        return None;
    }
    Some(capitalize(label))
}

/// First char upper, rest lower.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
