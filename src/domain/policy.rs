//! 도메인 정책(프롬프트 구성, 번호 목록 파싱, 최소 개수 규칙).

use regex::Regex;

use crate::domain::campaign::Campaign;

/// 한 번의 실행에서 요구되는 최소 메시지 개수.
pub const REQUIRED_MESSAGE_COUNT: usize = 20;

/// 메시지당 단어 수 가이드라인. 프롬프트 지시문에만 쓰인다.
pub const MAX_WORDS_PER_MESSAGE: usize = 30;

/// 캠페인 필드로 완성 API에 보낼 사용자 프롬프트를 생성한다.
/// link가 없으면 링크 지시문 자체를 넣지 않는다.
pub fn build_campaign_prompt(campaign: &Campaign) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Generate {} different short and engaging WhatsApp marketing messages for a brand called \"{}\", promoting the following product: \"{}\".\n",
        REQUIRED_MESSAGE_COUNT, campaign.brand, campaign.product
    ));
    out.push_str(&format!("Occasion: {}\n", campaign.occasion));
    out.push_str(&format!("Tone: {}\n", campaign.tone));
    if let Some(link) = &campaign.link {
        out.push_str(&format!("Include the link: {}\n", link));
    }
    out.push_str(&format!(
        "Keep each message under {} words, catchy, and conversational. Return only the messages as a plain numbered list.",
        MAX_WORDS_PER_MESSAGE
    ));
    out
}

/// 번호 목록 텍스트를 개별 메시지로 파싱한다.
/// "1. " 형태의 번호 머리말로 분리하고, 각 조각의 공백을 정리하고, 빈 조각은 버린다.
/// 입력 순서는 그대로 유지한다.
pub fn parse_numbered_list(raw: &str) -> Vec<String> {
    let splitter = Regex::new(r"\d+\.\s").unwrap();
    splitter
        .split(raw)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_campaign(link: Option<&str>) -> Campaign {
        Campaign {
            id: "c1".to_string(),
            brand: "Acme".to_string(),
            product: "Shoes".to_string(),
            tone: "fun".to_string(),
            occasion: "Sale".to_string(),
            link: link.map(str::to_string),
        }
    }

    #[test]
    fn prompt_without_link_has_no_link_clause() {
        let prompt = build_campaign_prompt(&sample_campaign(None));
        assert!(!prompt.contains("Include the link"));
        assert!(prompt.contains("Generate 20 different"));
        assert!(prompt.contains("a brand called \"Acme\""));
        assert!(prompt.contains("the following product: \"Shoes\""));
    }

    #[test]
    fn prompt_with_link_includes_it_verbatim() {
        let prompt = build_campaign_prompt(&sample_campaign(Some("http://x")));
        assert!(prompt.contains("Include the link: http://x"));
    }

    #[test]
    fn prompt_carries_tone_occasion_and_length_guideline() {
        let prompt = build_campaign_prompt(&sample_campaign(None));
        assert!(prompt.contains("Occasion: Sale"));
        assert!(prompt.contains("Tone: fun"));
        assert!(prompt.contains("under 30 words"));
        assert!(prompt.contains("plain numbered list"));
    }

    #[test]
    fn parses_numbered_list_in_order() {
        let parsed = parse_numbered_list("1. Hello\n2. World\n3. Foo");
        assert_eq!(parsed, vec!["Hello", "World", "Foo"]);
    }

    #[test]
    fn trims_whitespace_and_drops_empty_fragments() {
        let parsed = parse_numbered_list("1.  Hello  \n\n2. \n3. World\n");
        assert_eq!(parsed, vec!["Hello", "World"]);
    }

    #[test]
    fn handles_multi_digit_numbering() {
        let raw = (1..=21)
            .map(|n| format!("{n}. Message {n}"))
            .collect::<Vec<_>>()
            .join("\n");
        let parsed = parse_numbered_list(&raw);
        assert_eq!(parsed.len(), 21);
        assert_eq!(parsed[9], "Message 10");
        assert_eq!(parsed[20], "Message 21");
    }

    #[test]
    fn empty_input_parses_to_nothing() {
        assert!(parse_numbered_list("").is_empty());
        assert!(parse_numbered_list("   \n  ").is_empty());
    }
}
