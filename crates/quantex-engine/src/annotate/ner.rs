//! Rule-based numeric entity recognition over tagged tokens.

use super::types::{EntityLabel, EntitySpan, PosTag, Token};
use crate::text::currency::{is_currency_symbol, is_currency_word};

const UNIT_WORDS: &[&str] = &[
    "km", "kilometer", "kilometers", "kilometre", "kilometres", "mile", "miles", "meter",
    "meters", "metre", "metres", "cm", "mm", "feet", "ft", "inch", "inches", "kg", "kilogram",
    "kilograms", "ton", "tons", "tonne", "tonnes", "hectare", "hectares", "ha", "acre",
    "acres", "litre", "litres", "liter", "liters", "gallon", "gallons", "sq", "square",
    "cubic", "km2", "mph", "kph",
];

const DATE_LEADS: &[&str] = &["in", "since", "during", "until", "by", "from", "of", "year"];

const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];

const ARTICLE_MAGNITUDES: &[&str] = &["hundred", "thousand", "million", "billion", "trillion"];

/// Find numeral runs and label them CARDINAL, MONEY, QUANTITY, PERCENT, or DATE.
pub fn recognize(text: &str, tokens: &[Token]) -> Vec<EntitySpan> {
    let mut spans = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].pos != PosTag::Numeral {
            i += 1;
            continue;
        }
        let mut first = i;
        let mut last = i + 1;
        while last < tokens.len() {
            if tokens[last].pos == PosTag::Numeral {
                last += 1;
            } else if joins_spelled_run(tokens, last) {
                last += 2;
            } else {
                break;
            }
        }
        let run_end = last;

        if first > 0
            && matches!(tokens[first - 1].lower().as_str(), "a" | "an")
            && ARTICLE_MAGNITUDES.contains(&tokens[first].lower().as_str())
        {
            first -= 1;
        }

        let before = first.checked_sub(1).map(|k| &tokens[k]);
        let after = tokens.get(last);
        let after_lower = after.map(Token::lower).unwrap_or_default();

        let label = if is_year(tokens, first, last, before) {
            EntityLabel::Date
        } else if after_lower == "%" || after_lower == "percent" {
            last += 1;
            EntityLabel::Percent
        } else if before.is_some_and(is_money_prefix) {
            first -= 1;
            EntityLabel::Money
        } else if is_currency_word(&after_lower) {
            last += 1;
            EntityLabel::Money
        } else if UNIT_WORDS.contains(&after_lower.as_str()) {
            last += 1;
            EntityLabel::Quantity
        } else {
            EntityLabel::Cardinal
        };

        let start = tokens[first].start;
        let end = tokens[last - 1].end;
        spans.push(EntitySpan {
            label,
            start,
            end,
            text: text[start..end].to_string(),
            first_token: first,
            last_token: last,
        });
        i = last.max(run_end);
    }
    spans
}

/// "and" between two spelled-out numerals continues the run ("one hundred and ten").
fn joins_spelled_run(tokens: &[Token], at: usize) -> bool {
    let spelled = |t: &Token| t.pos == PosTag::Numeral && !t.is_digits();
    at > 0
        && tokens[at].lower() == "and"
        && spelled(&tokens[at - 1])
        && tokens.get(at + 1).is_some_and(spelled)
}

fn is_year(tokens: &[Token], first: usize, last: usize, before: Option<&Token>) -> bool {
    if last - first != 1 {
        return false;
    }
    let token = &tokens[first];
    let is_year_value = token.text.len() == 4
        && token.text.chars().all(|c| c.is_ascii_digit())
        && matches!(token.text.parse::<u32>(), Ok(1900..=2099));
    is_year_value
        && before.is_some_and(|b| {
            let lower = b.lower();
            DATE_LEADS.contains(&lower.as_str()) || MONTHS.contains(&lower.as_str())
        })
}

fn is_money_prefix(token: &Token) -> bool {
    let text = token.text.as_str();
    text.chars().count() == 1 && text.chars().all(is_currency_symbol)
        || (text.len() == 3 && text.chars().all(|c| c.is_ascii_uppercase()) && is_currency_word(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::tagger::tag;
    use crate::annotate::tokenizer::tokenize;

    fn entities(text: &str) -> Vec<(EntityLabel, String)> {
        let mut tokens = tokenize(text);
        tag(&mut tokens);
        recognize(text, &tokens)
            .into_iter()
            .map(|e| (e.label, e.text))
            .collect()
    }

    #[test]
    fn test_cardinal_runs() {
        assert_eq!(
            entities("23 were injured and 11 are missing"),
            vec![
                (EntityLabel::Cardinal, "23".to_string()),
                (EntityLabel::Cardinal, "11".to_string())
            ]
        );
        assert_eq!(
            entities("three hundred and fifty homes"),
            vec![(EntityLabel::Cardinal, "three hundred and fifty".to_string())]
        );
        assert_eq!(
            entities("a hundred people"),
            vec![(EntityLabel::Cardinal, "a hundred".to_string())]
        );
    }

    #[test]
    fn test_money_quantity_percent() {
        assert_eq!(
            entities("losses of 20 million dollars"),
            vec![(EntityLabel::Money, "20 million dollars".to_string())]
        );
        assert_eq!(
            entities("USD 5 million"),
            vec![(EntityLabel::Money, "USD 5 million".to_string())]
        );
        assert_eq!(
            entities("flooded 40 hectares"),
            vec![(EntityLabel::Quantity, "40 hectares".to_string())]
        );
        assert_eq!(
            entities("up 12 %"),
            vec![(EntityLabel::Percent, "12 %".to_string())]
        );
    }

    #[test]
    fn test_years_after_date_leads() {
        assert_eq!(
            entities("in 2019 over 300 died"),
            vec![
                (EntityLabel::Date, "2019".to_string()),
                (EntityLabel::Cardinal, "300".to_string())
            ]
        );
        assert_eq!(entities("2019"), vec![(EntityLabel::Cardinal, "2019".to_string())]);
    }
}
