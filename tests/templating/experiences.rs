#[cfg(test)]
mod verify {
    use notemark::annotating::Limits;
    use notemark::experience::parse_experiences;
    use notemark::rendering::{Renderer, Semantic};
    use notemark::templating::*;

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    #[test]
    fn section_payload_to_listing() {
        let experiences = parse_experiences(trim(
            r#"
{
    "header": "프로젝트 경험",
    "metadata": {
        "experiences": [
            {
                "experienceCode": "pay",
                "name": "결제 플랫폼",
                "period": "2021.03 - 2022.01",
                "companyName": "Acme",
                "techStack": "Java, Spring Boot; Kafka",
                "keywords": "Kafka, 정산",
                "details": "백엔드 개발 - 결제 시스템 고도화 (2021.03 - 2022.01)\n정산 배치 1,200,000건 처리\n\n"
            }
        ]
    }
}
            "#,
        ))
        .unwrap();

        let html = render_experiences(&experiences, &Semantic, &Limits::default()).unwrap();

        assert!(html.contains(r#"<li id="experience-pay">"#));
        assert!(html.contains("<strong>결제 플랫폼</strong>"));
        assert!(html.contains(r#"<span class="chip">Spring Boot</span>"#));
        assert!(html.contains(r#"<span class="title">백엔드 개발</span>"#));
        assert!(html.contains(r#"<span class="period">(<span class="figure">2021.03</span>"#));
        assert!(html.contains(r#"<span class="keyword">정산</span> 배치 <span class="figure">1,200,000</span>건"#));
        assert!(html.contains("<span>Keywords: Kafka, 정산</span>"));
    }

    #[test]
    fn details_with_selected_renderer() {
        let renderer = Renderer::lookup("semantic").unwrap();
        let html = render_details(
            "Search : Elasticsearch 도입, 응답 45% 단축",
            &["elasticsearch"],
            &renderer,
            &Limits::default(),
        )
        .unwrap();

        assert_eq!(
            html,
            concat!(
                r#"<div class="detail"><span class="title">Search</span> "#,
                r#"<span class="body"><span class="keyword">Elasticsearch</span> 도입, "#,
                r#"응답 <span class="figure">45%</span> 단축</span></div>"#,
                "\n"
            )
        );
    }

    #[test]
    fn titles_are_escaped_but_not_highlighted() {
        let rows = detail_rows(
            "<b>2024</b> - body",
            &["2024"],
            &Semantic,
            &Limits::default(),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title.as_deref(), Some("&lt;b&gt;2024&lt;/b&gt;"));
        assert_eq!(rows[0].html, "body");
    }
}
