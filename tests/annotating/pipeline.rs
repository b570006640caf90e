#[cfg(test)]
mod verify {
    use notemark::annotating::*;
    use notemark::markup::*;
    use notemark::rendering::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn badge_and_figure_keep_their_boundaries() {
        let raw = "2021.03(2021.03 - 2022.01) 매출 1,200,000원 증가";
        let html = highlight(raw, &NONE, &Tailwind, &Limits::default());

        let badge = Tailwind.style(Syntax::Period, "");
        let badge_open = &badge[..badge.find('>').unwrap() + 1];
        let figure = |s: &str| Tailwind.style(Syntax::Figure, s);

        let expected = format!(
            "{}{}({} - {})</span> 매출 {}원 증가",
            figure("2021.03"),
            badge_open,
            figure("2021.03"),
            figure("2022.01"),
            figure("1,200,000"),
        );
        assert_eq!(html, expected);

        // the badge's own class attribute was not rewritten
        assert!(html.contains(badge_open));
    }

    #[test]
    fn longer_keyword_wins_and_shorter_does_not_nest() {
        let html = highlight(
            "Worked on AI/LLM systems",
            &["AI", "AI/LLM"],
            &Semantic,
            &Limits::default(),
        );
        assert_eq!(
            html,
            r#"Worked on <span class="keyword">AI/LLM</span> systems"#
        );
        assert_eq!(html.matches("<span").count(), 1);
    }

    #[test]
    fn keywords_do_not_touch_figure_markup() {
        // "figure" and "class" only occur inside the markup of the tint
        let html = highlight(
            "grew 200%",
            &["figure", "class", "200"],
            &Semantic,
            &Limits::default(),
        );
        assert_eq!(
            html,
            r#"grew <span class="figure"><span class="keyword">200</span>%</span>"#
        );
    }

    #[test]
    fn markup_in_notes_is_inert() {
        let html = highlight(
            r#"<script>alert("x")</script> & 'quotes'"#,
            &["script"],
            &Semantic,
            &Limits::default(),
        );
        assert_eq!(
            html,
            concat!(
                r#"&lt;<span class="keyword">script</span>&gt;alert(&quot;x&quot;)"#,
                r#"&lt;/<span class="keyword">script</span>&gt; &amp; &#39;quotes&#39;"#
            )
        );
    }

    #[test]
    fn highlighting_twice_is_not_idempotent() {
        let once = highlight("총 3건", &NONE, &Semantic, &Limits::default());
        assert_eq!(once, r#"총 <span class="figure">3</span>건"#);

        // the second run escapes the markup produced by the first
        let twice = highlight(&once, &NONE, &Semantic, &Limits::default());
        assert_ne!(twice, once);
        assert!(twice.starts_with("총 &lt;span class=&quot;figure&quot;&gt;"));
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(
            highlight("단순 한 줄 메모", &NONE, &Tailwind, &Limits::default()),
            "단순 한 줄 메모"
        );
        assert_eq!(highlight("", &["x"], &Tailwind, &Limits::default()), "");
    }

    #[test]
    fn line_then_pipeline() {
        let line = split_once("백엔드 개발 - 결제 시스템 고도화 (2020.01 - 2020.12)");
        assert_eq!(line.head, "백엔드 개발");

        let html = highlight(line.body, &["결제"], &Semantic, &Limits::default());
        assert!(html.starts_with(r#"<span class="keyword">결제</span> 시스템 고도화 <span class="period">"#));
    }

    #[test]
    fn stages_compose_by_hand() {
        let raw = "Kafka (2023.02~) 5 brokers";
        let limits = Limits::default();

        let escaped = escape(raw);
        let badged = annotate_periods(&escaped, &Semantic);
        let tinted = annotate_figures(&badged, &Semantic, &limits);
        let underlined = underline(&tinted, &["kafka"], &Semantic, &limits);

        assert_eq!(underlined, highlight(raw, &["kafka"], &Semantic, &limits));
    }
}
