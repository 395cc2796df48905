use std::sync::Arc;
use std::time::Duration;

use radiotun::frame::Frame;
use radiotun::queue::{FrameQueue, HandoffQueue};
use tokio::time;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn pops_return_exact_push_order() {
    let queue = FrameQueue::new();

    for n in 0..10u8 {
        queue.push(Frame::new_from_slice(&[n]));
    }
    assert_eq!(queue.len(), 10);

    for n in 0..10u8 {
        assert_eq!(queue.pop().await.payload(), &[n]);
    }
    assert!(queue.is_empty());
}

#[tokio::test]
async fn fifo_order_holds_per_producer_under_concurrent_pushes() {
    let queue = Arc::new(HandoffQueue::new());

    let producers = 4usize;
    let per_producer = 100usize;

    let mut handles = Vec::new();
    for producer in 0..producers {
        let queue = queue.clone();
        handles.push(tokio::spawn(async move {
            for seq in 0..per_producer {
                queue.push((producer, seq));
                if seq % 16 == 0 {
                    time::sleep(Duration::from_millis(1)).await;
                }
            }
        }));
    }

    let mut next_seq = vec![0usize; producers];
    for _ in 0..producers * per_producer {
        let (producer, seq) = tokio::select! {
            item = queue.pop() => item,
            _ = time::sleep(Duration::from_secs(5)) => {
                panic!("Timeout waiting for a queued item.");
            }
        };

        assert_eq!(seq, next_seq[producer], "push order broken for one producer");
        next_seq[producer] += 1;
    }

    assert!(queue.is_empty());
    for handle in handles {
        handle.await.unwrap();
    }
}

#[tokio::test]
async fn pop_waits_for_a_concurrent_push() {
    let queue = Arc::new(FrameQueue::new());

    let popper = {
        let queue = queue.clone();
        tokio::spawn(async move { queue.pop().await })
    };

    // Give the popper time to park on the empty queue.
    time::sleep(Duration::from_millis(50)).await;
    assert!(!popper.is_finished());

    queue.push(Frame::new_from_slice(b"wake up"));

    let frame = tokio::select! {
        frame = popper => frame.unwrap(),
        _ = time::sleep(Duration::from_secs(5)) => {
            panic!("Timeout, popper never woke up.");
        }
    };
    assert_eq!(frame.payload(), b"wake up");
    assert!(queue.is_empty());
}

#[tokio::test]
async fn cancellation_interrupts_a_parked_pop() {
    let queue = Arc::new(FrameQueue::new());
    let cancel = CancellationToken::new();

    let worker = {
        let queue = queue.clone();
        let cancel = cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => None,
                frame = queue.pop() => Some(frame),
            }
        })
    };

    time::sleep(Duration::from_millis(50)).await;
    cancel.cancel();

    let result = tokio::select! {
        result = worker => result.unwrap(),
        _ = time::sleep(Duration::from_secs(5)) => {
            panic!("Timeout, cancellation did not interrupt pop.");
        }
    };

    assert!(result.is_none());
    assert!(queue.is_empty());
}
