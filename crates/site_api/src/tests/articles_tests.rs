use super::*;
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn catalog_covers_every_article_once() {
    assert_eq!(all().len(), ArticleId::ALL.len());
    for id in ArticleId::ALL {
        assert_eq!(article(id).id, id);
    }
}

#[test]
fn lookup_rejects_unknown_numbers() {
    assert_eq!(lookup("50").map(|a| a.id), Ok(ArticleId::Art50));
    assert_eq!(
        lookup("6").map(|a| a.id),
        Err(ArticleError::Unknown("6".into()))
    );
    assert!(lookup("five").is_err());
}

#[test]
fn prompt_falls_back_to_article_five() {
    assert_eq!(prompt_target("99").id, ArticleId::Art5);
    assert_eq!(prompt_target("").id, ArticleId::Art5);
    assert_eq!(prompt_target("55").id, ArticleId::Art55);
}

#[test]
fn rendered_prompt_has_title_sections_and_closing() {
    let prompt = render_prompt(article(ArticleId::Art51));
    assert!(prompt.starts_with("Title: Article 51 Compliance Card — EU AI Act\n"));
    assert!(prompt.contains("Section: Classification Criteria\n• Computational threshold"));
    assert_eq!(prompt.matches("Section: ").count(), 3);
    assert_eq!(prompt.matches("• ").count(), 12);
    assert!(prompt.contains("\n\nStyle: "));
    assert!(prompt.contains("\n\nContent Structure:\n\nHeader:\n\""));
    assert!(!prompt.ends_with('\n'));
    assert!(prompt.ends_with(
        "Closing: \"Classification clarity enables innovation within safe boundaries.\""
    ));
}

#[test]
fn demo_produces_one_result_per_scenario_in_score_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for entry in all() {
        let results = run_demo(entry, &mut rng);
        assert_eq!(results.len(), 3);
        for (result, scenario) in results.iter().zip(entry.scenarios) {
            assert_eq!(result.scenario, scenario);
            assert!((70..=99).contains(&result.score));
        }
    }
}

#[test]
fn demo_is_deterministic_for_a_seed() {
    let first = run_demo(article(ArticleId::Art5), &mut StdRng::seed_from_u64(42));
    let second = run_demo(article(ArticleId::Art5), &mut StdRng::seed_from_u64(42));
    let key = |results: &[DemoResult]| {
        results
            .iter()
            .map(|r| (r.status, r.score))
            .collect::<Vec<_>>()
    };
    assert_eq!(key(&first), key(&second));
}

#[test]
fn demo_status_serializes_like_the_page_expects() {
    let json = serde_json::to_string(&DemoStatus::AttentionNeeded).expect("json");
    assert_eq!(json, "\"ATTENTION NEEDED\"");
}
