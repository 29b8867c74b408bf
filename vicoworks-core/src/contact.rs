//! Contact links derived from the home profile.

use serde::Serialize;

use crate::records::HomeProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Whatsapp,
    Email,
    Linkedin,
    Github,
}

impl ContactKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Whatsapp => "WhatsApp",
            Self::Email => "Gmail",
            Self::Linkedin => "LinkedIn",
            Self::Github => "GitHub",
        }
    }
}

/// A clickable contact entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: &'static str,
    /// Raw stored value (number, address, or profile URL)
    pub value: String,
    pub href: String,
}

/// Build contact links in display order, skipping unset or blank fields.
pub fn contact_links(profile: &HomeProfile) -> Vec<ContactLink> {
    let fields = [
        (ContactKind::Whatsapp, profile.whatsapp.as_deref()),
        (ContactKind::Email, profile.gmail.as_deref()),
        (ContactKind::Linkedin, profile.linkedin.as_deref()),
        (ContactKind::Github, profile.github.as_deref()),
    ];

    fields
        .into_iter()
        .filter_map(|(kind, value)| {
            let value = value.map(str::trim).filter(|v| !v.is_empty())?;
            let href = match kind {
                ContactKind::Whatsapp => format!("https://wa.me/{}", value),
                ContactKind::Email => format!("mailto:{}", value),
                ContactKind::Linkedin | ContactKind::Github => value.to_string(),
            };
            Some(ContactLink {
                kind,
                label: kind.label(),
                value: value.to_string(),
                href,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_links_and_skips_missing() {
        let profile = HomeProfile {
            id: "h1".into(),
            whatsapp: Some("6281234567".into()),
            gmail: Some("vico@example.com".into()),
            linkedin: Some("  ".into()),
            github: None,
            ..Default::default()
        };

        let links = contact_links(&profile);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].href, "https://wa.me/6281234567");
        assert_eq!(links[1].kind, ContactKind::Email);
        assert_eq!(links[1].href, "mailto:vico@example.com");
    }

    #[test]
    fn profile_urls_verbatim() {
        let profile = HomeProfile {
            id: "h1".into(),
            github: Some("https://github.com/vico".into()),
            ..Default::default()
        };
        let links = contact_links(&profile);
        assert_eq!(links[0].href, "https://github.com/vico");
        assert_eq!(links[0].label, "GitHub");
    }
}
