use super::*;
use crate::dom::memory::MemNode;
use crate::schedule::manual::ManualScheduler;

fn item(position: usize, with_paragraph: bool) -> FaqItem<MemNode> {
    FaqItem {
        position,
        container: MemNode::new(),
        question: MemNode::new(),
        answer: MemNode::new(),
        icon: MemNode::with_text("+"),
        focus_target: with_paragraph.then(MemNode::new),
    }
}

fn accordion(count: usize) -> (Accordion<MemNode>, Vec<FaqItem<MemNode>>, ManualScheduler) {
    let scheduler = ManualScheduler::new();
    let items: Vec<_> = (1..=count).map(|p| item(p, true)).collect();
    let acc = Accordion::new(items.clone(), Rc::new(scheduler.clone()), 300);
    assert!(acc.prepare().is_ok());
    (acc, items, scheduler)
}

#[test]
fn answer_ids_are_one_indexed() {
    assert_eq!(answer_id(1), "faq-answer-1");
    assert_eq!(answer_id(12), "faq-answer-12");
}

#[test]
fn toggle_keys() {
    assert!(is_toggle_key("Enter"));
    assert!(is_toggle_key(" "));
    assert!(!is_toggle_key("Tab"));
    assert!(!is_toggle_key("Spacebar"));
}

#[test]
fn prepare_links_questions_to_answers() {
    let (_acc, items, _) = accordion(3);
    for (i, item) in items.iter().enumerate() {
        let id = format!("faq-answer-{}", i + 1);
        assert_eq!(item.answer.attr("id").as_deref(), Some(id.as_str()));
        assert_eq!(item.question.attr("aria-controls").as_deref(), Some(id.as_str()));
        assert_eq!(item.question.attr("aria-expanded").as_deref(), Some("false"));
    }
}

#[test]
fn prepare_keeps_document_positions_for_sparse_items() {
    let scheduler = ManualScheduler::new();
    let items = vec![item(1, true), item(3, true)];
    let acc = Accordion::new(items.clone(), Rc::new(scheduler), 300);
    assert!(acc.prepare().is_ok());
    assert_eq!(items[1].answer.attr("id").as_deref(), Some("faq-answer-3"));
}

#[test]
fn opening_applies_open_state() {
    let (mut acc, items, _) = accordion(2);
    assert!(acc.toggle(0).is_ok());
    let opened = &items[0];
    assert!(opened.container.has_class("open"));
    assert!(opened.answer.has_class("open"));
    assert_eq!(opened.question.attr("aria-expanded").as_deref(), Some("true"));
    assert_eq!(opened.icon.text(), "×");
    assert!(acc.is_open(0));
}

#[test]
fn toggling_twice_closes_again() {
    let (mut acc, items, _) = accordion(1);
    assert!(acc.toggle(0).is_ok());
    assert!(acc.toggle(0).is_ok());
    assert!(!acc.is_open(0));
    assert_eq!(items[0].icon.text(), "+");
    assert_eq!(items[0].question.attr("aria-expanded").as_deref(), Some("false"));
}

#[test]
fn opening_one_closes_the_others() {
    let (mut acc, items, _) = accordion(3);
    assert!(acc.toggle(0).is_ok());
    assert!(acc.toggle(2).is_ok());
    assert!(!acc.is_open(0));
    assert!(acc.is_open(2));
    assert_eq!(items[0].icon.text(), "+");
    assert_eq!(acc.open_count(), 1);
}

#[test]
fn at_most_one_open_for_any_toggle_sequence() {
    let (mut acc, _, _) = accordion(4);
    let sequence = [0, 1, 1, 3, 2, 2, 2, 0, 3, 3, 1, 0, 0];
    for index in sequence {
        assert!(acc.toggle(index).is_ok());
        assert!(acc.open_count() <= 1);
    }
}

#[test]
fn focus_moves_into_answer_after_delay() {
    let (mut acc, items, scheduler) = accordion(1);
    assert!(acc.toggle(0).is_ok());
    let Some(paragraph) = items[0].focus_target.clone() else {
        panic!("fixture has a paragraph");
    };

    scheduler.advance(299);
    assert_eq!(paragraph.focus_count(), 0);
    scheduler.advance(1);
    assert_eq!(paragraph.focus_count(), 1);
    assert_eq!(paragraph.attr("tabindex").as_deref(), Some("-1"));
}

#[test]
fn closing_removes_temporary_tabindex() {
    let (mut acc, items, scheduler) = accordion(1);
    assert!(acc.toggle(0).is_ok());
    scheduler.advance(300);
    assert!(acc.toggle(0).is_ok());
    let Some(paragraph) = &items[0].focus_target else {
        panic!("fixture has a paragraph");
    };
    assert_eq!(paragraph.attr("tabindex"), None);
}

#[test]
fn closing_leaves_foreign_tabindex_alone() {
    let (mut acc, items, _) = accordion(1);
    let Some(paragraph) = &items[0].focus_target else {
        panic!("fixture has a paragraph");
    };
    assert!(paragraph.set_attr("tabindex", "0").is_ok());
    assert!(acc.toggle(0).is_ok());
    assert!(acc.toggle(0).is_ok());
    assert_eq!(paragraph.attr("tabindex").as_deref(), Some("0"));
}

#[test]
fn reopening_before_delay_cancels_stale_focus() {
    let (mut acc, items, scheduler) = accordion(2);
    assert!(acc.toggle(0).is_ok());
    scheduler.advance(100);
    assert!(acc.toggle(1).is_ok());
    scheduler.advance(1000);

    let first = items[0].focus_target.as_ref().map_or(0, MemNode::focus_count);
    let second = items[1].focus_target.as_ref().map_or(0, MemNode::focus_count);
    assert_eq!(first, 0);
    assert_eq!(second, 1);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn closing_before_delay_cancels_focus() {
    let (mut acc, items, scheduler) = accordion(1);
    assert!(acc.toggle(0).is_ok());
    assert!(acc.toggle(0).is_ok());
    scheduler.advance(1000);
    assert_eq!(items[0].focus_target.as_ref().map_or(0, MemNode::focus_count), 0);
}

#[test]
fn answer_without_paragraph_skips_focus() {
    let scheduler = ManualScheduler::new();
    let items = vec![item(1, false)];
    let mut acc = Accordion::new(items, Rc::new(scheduler.clone()), 300);
    assert!(acc.toggle(0).is_ok());
    assert_eq!(scheduler.pending(), 0);
    assert!(acc.is_open(0));
}

#[test]
fn out_of_range_toggle_is_a_noop() {
    let (mut acc, _, _) = accordion(2);
    assert!(acc.toggle(9).is_ok());
    assert_eq!(acc.open_count(), 0);
    assert!(!acc.is_empty());
}
