use super::*;

fn q(index: u8) -> QuestionIndex {
    QuestionIndex::new(index).expect("valid index")
}

fn answer(index: u8, risk: RiskWeight) -> AssessmentAnswer {
    AssessmentAnswer {
        question: q(index),
        value: format!("q{index}"),
        risk,
    }
}

fn answer_all(wizard: &mut Wizard, risk: RiskWeight) {
    for _ in 1..QUESTION_COUNT {
        wizard.select("option", risk).expect("select");
        wizard.next().expect("next");
    }
    wizard.select("option", risk).expect("select last");
}

#[test]
fn score_bounds_and_rounding() {
    assert_eq!(risk_score([] as [RiskWeight; 0]), 0);
    assert_eq!(risk_score([RiskWeight::High; 5]), 100);
    assert_eq!(risk_score([RiskWeight::Low; 5]), 33);
    assert_eq!(risk_score([RiskWeight::Medium; 5]), 67);
    assert_eq!(risk_score([RiskWeight::Low]), 7);
}

#[test]
fn score_never_exceeds_one_hundred() {
    assert_eq!(risk_score([RiskWeight::High; 9]), 100);
}

#[test]
fn every_combination_stays_in_range_and_matches_its_level() {
    let weights = [RiskWeight::Low, RiskWeight::Medium, RiskWeight::High];
    for a in weights {
        for b in weights {
            for c in weights {
                for d in weights {
                    for e in weights {
                        let score = risk_score([a, b, c, d, e]);
                        assert!(score <= 100);
                        let label = RiskLevel::from_score(score).label();
                        match score {
                            80..=100 => assert_eq!(label, "High Risk"),
                            60..=79 => assert_eq!(label, "Medium Risk"),
                            _ => assert_eq!(label, "Low Risk"),
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn level_thresholds() {
    assert_eq!(RiskLevel::from_score(80), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(79), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(60), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(59), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
}

#[test]
fn assess_uses_tier_recommendation() {
    let answers = vec![
        answer(1, RiskWeight::High),
        answer(2, RiskWeight::High),
        answer(3, RiskWeight::High),
        answer(4, RiskWeight::High),
        answer(5, RiskWeight::Medium),
    ];
    let result = assess(&answers);
    assert_eq!(result.score, 93);
    assert_eq!(result.level, RiskLevel::High);
    assert_eq!(result.recommendation.heading, "Immediate Action Required");
    assert_eq!(result.recommendation.actions.len(), 3);
}

#[test]
fn collect_answers_keeps_latest_per_question() {
    let answers = collect_answers(vec![
        answer(2, RiskWeight::High),
        answer(2, RiskWeight::Low),
        answer(1, RiskWeight::Medium),
    ]);
    assert_eq!(answers.len(), 2);
    assert_eq!(answers[&q(2)].risk, RiskWeight::Low);
}

#[test]
fn next_is_blocked_until_current_question_is_answered() {
    let mut wizard = Wizard::new();
    assert!(!wizard.can_advance());
    assert_eq!(wizard.next(), Err(WizardError::Unanswered(q(1))));

    wizard.select("internal-tool", RiskWeight::Low).expect("select");
    assert!(wizard.can_advance());
    assert_eq!(wizard.next(), Ok(q(2)));
    assert!(!wizard.can_advance());
}

#[test]
fn previous_is_rejected_only_on_first_question() {
    let mut wizard = Wizard::new();
    assert_eq!(wizard.previous(), Err(WizardError::FirstQuestion));

    wizard.select("a", RiskWeight::Medium).expect("select");
    wizard.next().expect("next");
    assert_eq!(wizard.previous(), Ok(q(1)));
}

#[test]
fn answers_survive_navigation() {
    let mut wizard = Wizard::new();
    wizard.select("customer-assistant", RiskWeight::Medium).expect("select");
    wizard.next().expect("next");
    wizard.select("no-biometrics", RiskWeight::Low).expect("select");
    wizard.previous().expect("back");

    let selected = wizard.selected().expect("answer restored");
    assert_eq!(selected.value, "customer-assistant");
    assert!(wizard.can_advance());

    wizard.next().expect("forward again");
    assert_eq!(wizard.selected().map(|a| a.value.as_str()), Some("no-biometrics"));
}

#[test]
fn results_only_from_last_answered_question() {
    let mut wizard = Wizard::new();
    wizard.select("a", RiskWeight::Low).expect("select");
    assert_eq!(
        wizard.show_results(),
        Err(WizardError::ResultsUnavailable(q(1)))
    );

    answer_all(&mut wizard, RiskWeight::High);
    assert_eq!(wizard.next(), Err(WizardError::LastQuestion));

    let result = wizard.show_results().expect("results");
    assert_eq!(result.score, 100);
    assert_eq!(result.level.label(), "High Risk");
    assert_eq!(wizard.state(), WizardState::Results);
    assert_eq!(wizard.progress_percent(), 100);
    assert_eq!(wizard.previous(), Err(WizardError::Finished));
    assert_eq!(wizard.select("x", RiskWeight::Low), Err(WizardError::Finished));
}

#[test]
fn progress_tracks_current_question() {
    let mut wizard = Wizard::new();
    assert_eq!(wizard.progress_percent(), 20);
    wizard.select("a", RiskWeight::Low).expect("select");
    wizard.next().expect("next");
    assert_eq!(wizard.progress_percent(), 40);
}

#[test]
fn reset_clears_answers() {
    let mut wizard = Wizard::new();
    answer_all(&mut wizard, RiskWeight::Low);
    wizard.reset();
    assert_eq!(wizard.state(), WizardState::Question(QuestionIndex::FIRST));
    assert_eq!(wizard.answers().count(), 0);
}

#[test]
fn question_catalog_is_indexed_from_one() {
    for index in QuestionIndex::all() {
        let entry = question(index);
        assert_eq!(entry.index, index.get());
        assert!(!entry.options.is_empty());
    }
}

#[test]
fn view_gates_controls_on_answers() {
    let mut wizard = Wizard::new();
    let initial = wizard.view();
    assert_eq!(initial.question, 1);
    assert_eq!(initial.progress, 20);
    assert!(!initial.can_advance);
    assert!(!initial.can_go_back);
    assert!(!initial.on_last_question);

    wizard.select("option", RiskWeight::Medium).expect("select");
    assert!(wizard.view().can_advance);
    wizard.next().expect("next");
    let second = wizard.view();
    assert_eq!(second.question, 2);
    assert!(!second.can_advance);
    assert!(second.can_go_back);

    wizard.reset();
    answer_all(&mut wizard, RiskWeight::High);
    let last = wizard.view();
    assert!(last.on_last_question);
    assert!(last.can_advance);

    wizard.show_results().expect("results");
    let done = wizard.view();
    assert!(done.finished);
    assert!(!done.can_advance);
    assert!(!done.can_go_back);
    assert_eq!(done.progress, 100);
}
