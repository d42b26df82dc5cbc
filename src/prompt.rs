//! System prompt composer.
//!
//! [`compose`] renders the merchant's facts, the tone and a fixed ruleset,
//! then appends at most one emphasis line chosen by keyword detection on the
//! user's message. Output is a pure function of its inputs.
//!
//! ```text
//! 1. identity + facts   — name, products, prices, delivery, hours, services, contact
//! 2. tone               — "Konuşma tarzın: …"
//! 3. ruleset            — numbered directives, incl. "no <think> tags"
//! 4. emphasis           — (optional) first matching Topic in PRIORITY order
//! ```

use crate::profile::MerchantProfile;

const SEPARATOR: &str = "\n\n";

/// Rendered in place of an empty product or service list.
pub const EMPTY_LIST: &str = "Bilgi yok";

const RULES: &str = "Görevlerin:
1. Müşterilere samimi, net ve kısa cevaplar ver.
2. Ürünler ve fiyatlar hakkında bilgi ver, kesin fiyat için ölçüm gerektiğini belirt.
3. Teslimat ve çalışma saatleri hakkında bilgi ver.
4. Hizmetlerimizi anlat.
5. İletişim bilgilerini paylaş.
6. Gerektiğinde kullanıcı sorusuna göre uygun bilgiyi öne çıkar.
7. Düşünme süreçlerini veya <think> gibi etiketleri kullanma, sadece doğrudan cevabı ver.";

/// Question categories that earn an extra emphasis line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Store,
    Contact,
    Services,
}

impl Topic {
    /// Scan order. When a message matches several topics the earliest wins.
    pub const PRIORITY: [Topic; 3] = [Topic::Store, Topic::Contact, Topic::Services];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Topic::Store => &["mağaza", "adres", "nerede", "konum", "lokasyon"],
            Topic::Contact => &["telefon", "email", "e-posta", "iletişim", "bize nasıl ulaşırız"],
            Topic::Services => &["hizmet", "montaj", "ölçüm", "garanti"],
        }
    }

    fn emphasis(self, profile: &MerchantProfile) -> String {
        match self {
            Topic::Store => format!("Mağaza adresimiz: {}", profile.contact.address),
            Topic::Contact => format!(
                "İletişim bilgilerimiz: Telefon: {}, Email: {}",
                profile.contact.phone, profile.contact.email
            ),
            Topic::Services => format!("Sunulan hizmetler: {}", join_or_placeholder(&profile.services)),
        }
    }
}

/// First topic in [`Topic::PRIORITY`] with a keyword contained in `message`.
pub fn detect_topic(message: &str) -> Option<Topic> {
    let folds = fold_case(message);
    Topic::PRIORITY.into_iter().find(|topic| {
        topic
            .keywords()
            .iter()
            .any(|k| folds.iter().any(|folded| folded.contains(k)))
    })
}

/// Build the system prompt for one chat turn.
pub fn compose(profile: &MerchantProfile, user_message: &str) -> String {
    let contact = &profile.contact;
    let facts = format!(
        "Sen {name} firmasının müşteri temsilcisisin.
Firma bilgilerin:
- Ürünler: {products}
- Fiyat aralığı: {price}
- Teslimat süresi: {delivery}
- Çalışma saatleri: {hours}
- Hizmetlerimiz: {services}
- İletişim bilgileri: Telefon: {phone}, Email: {email}, Adres: {address}",
        name = profile.name,
        products = join_or_placeholder(&profile.products),
        price = profile.price_range,
        delivery = profile.delivery_time,
        hours = profile.working_hours,
        services = join_or_placeholder(&profile.services),
        phone = contact.phone,
        email = contact.email,
        address = contact.address,
    );

    let mut parts = vec![facts, format!("Konuşma tarzın: {}", profile.tone), RULES.to_string()];
    if let Some(topic) = detect_topic(user_message) {
        parts.push(topic.emphasis(profile));
    }

    parts.join(SEPARATOR).trim().to_string()
}

fn join_or_placeholder(items: &[String]) -> String {
    let items: Vec<&str> = items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if items.is_empty() {
        EMPTY_LIST.to_string()
    } else {
        items.join(", ")
    }
}

// `str::to_lowercase` maps 'İ' to "i\u{307}", which no keyword contains, and
// 'I' to 'i' where Turkish wants 'ı'. Keywords hold both letters ("email",
// "ulaşırız"), so the message is matched under both readings of 'I'.
fn fold_case(text: &str) -> [String; 2] {
    let dotted = text.replace('İ', "i");
    let turkish = dotted.replace('I', "ı");
    [dotted.to_lowercase(), turkish.to_lowercase()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Contact;

    fn emphasis_lines(prompt: &str) -> Vec<&str> {
        prompt
            .lines()
            .filter(|l| {
                l.starts_with("Mağaza adresimiz:")
                    || l.starts_with("İletişim bilgilerimiz:")
                    || l.starts_with("Sunulan hizmetler:")
            })
            .collect()
    }

    fn bare_profile() -> MerchantProfile {
        MerchantProfile {
            products: vec![],
            services: vec![],
            contact: Contact {
                phone: "1".into(),
                email: "e".into(),
                address: "a".into(),
            },
            ..MerchantProfile::default()
        }
    }

    #[test]
    fn compose_is_deterministic() {
        let p = MerchantProfile::default();
        let msg = "zebra perde fiyatı nedir?";
        assert_eq!(compose(&p, msg), compose(&p, msg));
    }

    #[test]
    fn compose_embeds_profile_facts() {
        let p = MerchantProfile::default();
        let prompt = compose(&p, "merhaba");
        assert!(prompt.starts_with("Sen Demo Perde Sistemleri firmasının"));
        assert!(prompt.contains("- Ürünler: stor perde, zebra perde, pilise perde"));
        assert!(prompt.contains("- Fiyat aralığı: 500 - 1500 TL"));
        assert!(prompt.contains("- Hizmetlerimiz: ücretsiz ölçüm, profesyonel montaj, garantili hizmet"));
        assert!(prompt.contains("Telefon: +90 212 123 45 67, Email: info@demoperde.com, Adres: İstiklal"));
        assert!(prompt.contains("Konuşma tarzın: samimi ve güven veren"));
        assert!(prompt.contains("7. Düşünme süreçlerini veya <think>"));
    }

    #[test]
    fn no_trigger_means_no_emphasis() {
        let prompt = compose(&MerchantProfile::default(), "merhaba");
        assert!(emphasis_lines(&prompt).is_empty());
        assert!(prompt.ends_with("sadece doğrudan cevabı ver."));
    }

    #[test]
    fn empty_lists_render_placeholder() {
        let prompt = compose(&bare_profile(), "montaj var mı");
        assert!(prompt.contains("- Ürünler: Bilgi yok"));
        assert!(prompt.contains("- Hizmetlerimiz: Bilgi yok"));
        assert!(prompt.ends_with("Sunulan hizmetler: Bilgi yok"));
        assert!(!prompt.contains(": ,"));
        assert!(!prompt.contains(", \n"));
        assert!(!prompt.contains(",,"));
    }

    #[test]
    fn blank_list_entries_are_skipped() {
        let profile = MerchantProfile {
            services: vec!["".into(), "  ".into()],
            ..bare_profile()
        };
        let prompt = compose(&profile, "merhaba");
        assert!(prompt.contains("- Hizmetlerimiz: Bilgi yok"));
    }

    #[test]
    fn contact_beats_services() {
        let prompt = compose(
            &MerchantProfile::default(),
            "telefon numaranız ve montaj hizmetiniz nedir",
        );
        let lines = emphasis_lines(&prompt);
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0],
            "İletişim bilgilerimiz: Telefon: +90 212 123 45 67, Email: info@demoperde.com"
        );
    }

    #[test]
    fn store_beats_contact() {
        assert_eq!(detect_topic("mağaza adresiniz ve telefonunuz"), Some(Topic::Store));
        let prompt = compose(&MerchantProfile::default(), "mağaza adresiniz ve telefonunuz");
        assert_eq!(
            emphasis_lines(&prompt),
            vec!["Mağaza adresimiz: İstiklal Cad. No:123, İstanbul"]
        );
    }

    #[test]
    fn services_alone() {
        assert_eq!(detect_topic("garanti veriyor musunuz"), Some(Topic::Services));
    }

    #[test]
    fn detection_ignores_case() {
        assert_eq!(detect_topic("TELEFON?"), Some(Topic::Contact));
        assert_eq!(detect_topic("MAĞAZANIZ NEREDE"), Some(Topic::Store));
        assert_eq!(detect_topic("İLETİŞİM"), Some(Topic::Contact));
        assert_eq!(detect_topic("BİZE NASIL ULAŞIRIZ"), Some(Topic::Contact));
        assert_eq!(detect_topic("EMAIL ADRESİNİZ"), Some(Topic::Store));
        assert_eq!(detect_topic("EMAIL"), Some(Topic::Contact));
        assert_eq!(detect_topic("fiyat"), None);
    }

    #[test]
    fn multi_word_keyword_matches() {
        assert_eq!(detect_topic("Bize nasıl ulaşırız?"), Some(Topic::Contact));
    }

    #[test]
    fn output_is_trimmed() {
        let prompt = compose(&MerchantProfile::default(), "adres");
        assert_eq!(prompt, prompt.trim());
    }
}
