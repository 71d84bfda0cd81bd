mod common;

use common::{token_child, token_root, Token};
use pegsearch::{Frontier, QueueFrontier, SearchError, StackFrontier};

fn fill<F: Frontier<Token>>(frontier: &mut F, count: i64) {
    let root = token_root();
    for id in 0..count {
        frontier.push(token_child(&root, id, (0, 0)));
    }
}

fn drain<F: Frontier<Token>>(frontier: &mut F) -> Vec<i64> {
    let mut out = Vec::new();
    while !frontier.is_empty() {
        out.push(frontier.pop().unwrap().state.0);
    }
    out
}

#[test]
fn test_stack_pops_last_in_first_out() {
    let mut stack = StackFrontier::new();
    fill(&mut stack, 5);
    assert_eq!(drain(&mut stack), vec![4, 3, 2, 1, 0]);
}

#[test]
fn test_queue_pops_first_in_first_out() {
    let mut queue = QueueFrontier::new();
    fill(&mut queue, 5);
    assert_eq!(drain(&mut queue), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_size_tracks_pushes_and_pops() {
    let mut stack = StackFrontier::new();
    let mut queue = QueueFrontier::new();
    fill(&mut stack, 7);
    fill(&mut queue, 7);

    for _ in 0..3 {
        stack.pop().unwrap();
        queue.pop().unwrap();
    }

    assert_eq!(stack.len(), 4);
    assert_eq!(queue.len(), 4);
    assert!(!stack.is_empty());
}

#[test]
fn test_pop_on_empty_frontier_is_an_error() {
    let mut stack: StackFrontier<Token> = StackFrontier::new();
    let mut queue: QueueFrontier<Token> = QueueFrontier::new();

    assert_eq!(stack.pop().unwrap_err(), SearchError::EmptyFrontier);
    assert_eq!(queue.pop().unwrap_err(), SearchError::EmptyFrontier);
}

#[test]
fn test_clear_and_interleaved_use() {
    let root = token_root();
    let mut queue = QueueFrontier::new();
    queue.push(token_child(&root, 1, (0, 0)));
    queue.push(token_child(&root, 2, (0, 0)));
    assert_eq!(queue.pop().unwrap().state.0, 1);
    queue.push(token_child(&root, 3, (0, 0)));
    assert_eq!(drain(&mut queue), vec![2, 3]);

    fill(&mut queue, 3);
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
}

#[test]
fn test_boxed_frontier_forwards() {
    let mut boxed: Box<dyn Frontier<Token>> = Box::new(StackFrontier::new());
    fill(&mut boxed, 3);
    assert_eq!(boxed.name(), "stack");
    assert_eq!(boxed.len(), 3);
    assert_eq!(boxed.pop().unwrap().state.0, 2);
}
