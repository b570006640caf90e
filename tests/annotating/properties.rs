#[cfg(test)]
mod verify {
    use notemark::annotating::*;
    use notemark::markup::*;
    use notemark::rendering::*;

    fn samples() -> Vec<String> {
        let mut samples: Vec<String> = vec![
            "",
            " ",
            "plain words",
            "<",
            ">",
            "<>",
            "<<>>",
            "a<b",
            "a>b<c",
            "&amp;",
            "\"'\"'",
            "<span class=\"x\">y</span>",
            "<b><i></i></b>",
            "결제 (2021.03 - 2022.01) 1,000,000원 & 99.9% <i>",
            "(2021.03 <b>bold</b>)",
            "R&D :: AI/LLM - C++ — 10:30",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        // every two-character combination of the interesting characters
        let alphabet = ['<', '>', '&', '"', '\'', 'a', '/', ' '];
        for a in alphabet {
            for b in alphabet {
                samples.push(format!("{}{}", a, b));
            }
        }

        samples
    }

    #[test]
    fn tokens_reconstruct_input() {
        for sample in samples() {
            let joined: String = tokenize(&sample)
                .iter()
                .map(|token| token.as_str())
                .collect();
            assert_eq!(joined, sample);
        }
    }

    #[test]
    fn tokens_alternate_text_and_tag() {
        for sample in samples() {
            let tokens = tokenize(&sample);
            assert_eq!(tokens.len() % 2, 1);
            for (i, token) in tokens.iter().enumerate() {
                assert_eq!(token.is_tag(), i % 2 == 1, "{:?}", tokens);
            }
        }
    }

    #[test]
    fn escape_leaves_no_raw_markup_characters() {
        for sample in samples() {
            let escaped = escape(&sample);
            assert!(!escaped.contains(['<', '>', '"', '\'']), "{}", escaped);
            assert_eq!(escaped.matches('&').count(), {
                let s = &sample;
                s.matches(['&', '<', '>', '"', '\'']).count()
            });
        }
    }

    #[test]
    fn underline_without_keywords_is_identity() {
        let keywords: Vec<String> = Vec::new();
        for sample in samples() {
            assert_eq!(
                underline(&sample, &keywords, &Tailwind, &Limits::default()),
                sample
            );
        }
    }

    #[test]
    fn highlighted_text_never_exposes_raw_characters() {
        // apart from the markup, nothing but entities should remain
        for sample in samples() {
            let html = highlight(&sample, &["a", "amp", "b"], &Semantic, &Limits::default());
            let text: String = tokenize(&html)
                .into_iter()
                .filter(|token| !token.is_tag())
                .map(|token| token.as_str())
                .collect();
            assert!(!text.contains(['<', '>', '"', '\'']), "{} -> {}", sample, html);
        }
    }

    #[test]
    fn split_without_separator_keeps_line() {
        for sample in samples() {
            let line = split_once(&sample);
            if line.head.is_empty() {
                assert_eq!(line.body, sample);
            } else {
                assert!(sample.starts_with(line.head));
                assert!(sample.ends_with(line.body));
            }
        }
    }
}
