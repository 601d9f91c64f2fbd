use super::*;
use core::time::Duration;
use futures::StreamExt;
use proptest::prelude::*;
use tokio::time::timeout;

const WAIT: Duration = Duration::from_secs(5);

async fn collect_all<T>(mut merged: Merged<T>) -> Vec<T> {
    let mut out = Vec::new();
    while let Some(value) = merged.recv().await {
        out.push(value);
    }
    out
}

#[tokio::test]
async fn source_yields_values_in_order_then_closes() {
    let mut rx = source(vec![4, 2, 9]);
    assert_eq!(rx.recv().await, Some(4));
    assert_eq!(rx.recv().await, Some(2));
    assert_eq!(rx.recv().await, Some(9));
    assert_eq!(rx.recv().await, None);
    assert_eq!(rx.recv().await, None);
}

#[tokio::test]
async fn empty_source_is_closed_immediately() {
    let mut rx = source(Vec::<i32>::new());
    assert_eq!(rx.recv().await, None);
}

#[tokio::test]
async fn source_capacity_matches_item_count() {
    let rx = source(0..7);
    assert_eq!(rx.max_capacity(), 7);
    assert_eq!(rx.len(), 7);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn merges_mixed_sources() {
    let inputs: [&[i32]; 5] = [&[1, 3, 9, 10], &[-1, 5, 6, 7, 8], &[], &[0], &[1]];
    let sources = inputs.iter().map(|values| source(values.iter().copied()));

    let mut got = timeout(WAIT, collect_all(merge(sources))).await.unwrap();
    got.sort_unstable();

    assert_eq!(got, vec![-1, 0, 1, 1, 3, 5, 6, 7, 8, 9, 10]);
}

#[tokio::test]
async fn merging_nothing_closes_immediately() {
    let got = timeout(WAIT, collect_all(merge(Vec::<Source<u8>>::new())))
        .await
        .unwrap();
    assert!(got.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn per_source_order_is_preserved() {
    const PER_SOURCE: u32 = 200;
    const SOURCES: u32 = 4;

    let sources = (0..SOURCES).map(|s| source((0..PER_SOURCE).map(move |i| (s, i))));
    let got = timeout(WAIT, collect_all(merge(sources))).await.unwrap();

    assert_eq!(got.len(), (SOURCES * PER_SOURCE) as usize);
    for s in 0..SOURCES {
        let seq: Vec<u32> = got.iter().filter(|(src, _)| *src == s).map(|(_, i)| *i).collect();
        assert_eq!(seq, (0..PER_SOURCE).collect::<Vec<_>>(), "source {s} reordered");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn stream_adaptor_yields_everything() {
    let mut got: Vec<_> = timeout(
        WAIT,
        merge_stream([source(["a", "b"]), source(["c"])]).collect::<Vec<_>>(),
    )
    .await
    .unwrap();
    got.sort_unstable();
    assert_eq!(got, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn open_source_keeps_merge_open() {
    let (tx, rx) = mpsc::channel(1);
    tx.send(1).await.unwrap();

    let mut merged = merge([rx, source([2])]);
    let mut seen = vec![
        merged.recv().await.unwrap(),
        merged.recv().await.unwrap(),
    ];
    seen.sort_unstable();
    assert_eq!(seen, vec![1, 2]);

    // The first source still has a live sender, so no end-of-stream yet.
    assert!(timeout(Duration::from_millis(100), merged.recv()).await.is_err());

    drop(tx);
    assert_eq!(timeout(WAIT, merged.recv()).await.unwrap(), None);
}

#[tokio::test]
async fn cancellation_closes_merge_over_open_source() {
    let (tx, rx) = mpsc::channel(1);
    tx.send(7).await.unwrap();
    let token = CancellationToken::new();

    let mut merged = merge_with_cancel([rx], token.clone());
    assert_eq!(merged.recv().await, Some(7));

    token.cancel();
    assert_eq!(timeout(WAIT, merged.recv()).await.unwrap(), None);
    drop(tx);
}

#[tokio::test]
async fn dropping_the_reader_releases_sources() {
    let (tx, rx) = mpsc::channel(1);
    let merged = merge([rx]);
    drop(merged);

    // Either the forward fails or the idle watch fires first; the send itself
    // may already see a released source.
    let _ = tx.send(1).await;
    assert!(timeout(WAIT, tx.closed()).await.is_ok());
}

#[tokio::test]
async fn dropping_the_reader_releases_idle_open_sources() {
    let (tx, rx) = mpsc::channel::<i32>(1);
    drop(merge([rx]));

    // Nothing is ever sent, so the drain task must notice the reader is gone
    // while it waits on the source.
    assert!(timeout(WAIT, tx.closed()).await.is_ok());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn merged_multiset_equals_union_of_inputs(
        inputs in prop::collection::vec(prop::collection::vec(any::<i16>(), 0..32), 0..8)
    ) {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .unwrap();

        let mut got = rt.block_on(async {
            let sources = inputs.iter().cloned().map(source);
            timeout(WAIT, collect_all(merge(sources))).await.unwrap()
        });

        let mut expected: Vec<i16> = inputs.concat();
        got.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(got, expected);
    }
}
