// =========================================================================
// FALSIFY: classification metric invariants
//
// Each test names a property that must hold for every valid input and
// tries to break it. A failure message starts with FALSIFIED.
//
// References:
//   - Sokolova & Lapalme (2009) "A systematic analysis of performance measures"
//   - Gorodkin (2004) "Comparing two K-category assignments by a K-category
//     correlation coefficient"
// =========================================================================

use super::*;

/// Accuracy lies in [0, 1]
#[test]
fn falsify_accuracy_bounded() {
    let y_true = vec![0, 1, 2, 0, 1, 2];
    let y_pred = vec![0, 2, 1, 0, 0, 1];

    let acc = accuracy(&y_pred, &y_true, 3).unwrap();
    assert!(
        (0.0..=1.0).contains(&acc),
        "FALSIFIED: accuracy={acc} not in [0, 1]"
    );
}

/// Perfect predictions give accuracy = balanced accuracy = MCC = 1
#[test]
fn falsify_perfect_predictions_score_one() {
    let y = vec![0, 1, 2, 3, 4, 0, 0, 1];
    let acc = accuracy(&y, &y, 5).unwrap();
    let bal = balanced_accuracy(&y, &y, 5).unwrap();
    let mcc = matthews_corrcoef(&y, &y, 5).unwrap();
    assert!((acc - 1.0).abs() < 1e-12, "FALSIFIED: accuracy={acc}");
    assert!((bal - 1.0).abs() < 1e-12, "FALSIFIED: balanced accuracy={bal}");
    assert!((mcc - 1.0).abs() < 1e-12, "FALSIFIED: MCC={mcc}");
}

/// Every metric is a pure function of its inputs
#[test]
fn falsify_metrics_idempotent() {
    let y_true = vec![0, 0, 0, 1, 1, 2, 3, 4, 4, 4];
    let y_pred = vec![0, 1, 0, 1, 2, 2, 3, 4, 0, 4];

    let first = (
        accuracy(&y_pred, &y_true, 5).unwrap(),
        balanced_accuracy(&y_pred, &y_true, 5).unwrap(),
        matthews_corrcoef(&y_pred, &y_true, 5).unwrap(),
    );
    let second = (
        accuracy(&y_pred, &y_true, 5).unwrap(),
        balanced_accuracy(&y_pred, &y_true, 5).unwrap(),
        matthews_corrcoef(&y_pred, &y_true, 5).unwrap(),
    );
    assert_eq!(first, second, "FALSIFIED: metrics changed between calls");
}

mod classification_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    fn labels(n_classes: usize) -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
        (1..=60usize).prop_flat_map(move |n| {
            (
                proptest::collection::vec(0..n_classes, n),
                proptest::collection::vec(0..n_classes, n),
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn falsify_prop_accuracy_is_match_fraction((y_pred, y_true) in labels(5)) {
            let acc = accuracy(&y_pred, &y_true, 5).unwrap();
            let matches = y_pred.iter().zip(&y_true).filter(|(p, t)| p == t).count();
            prop_assert!(
                (acc - matches as f64 / y_true.len() as f64).abs() < 1e-12,
                "FALSIFIED: accuracy={} != {}/{}", acc, matches, y_true.len()
            );
        }

        #[test]
        fn falsify_prop_balanced_accuracy_bounded((y_pred, y_true) in labels(5)) {
            let bal = balanced_accuracy(&y_pred, &y_true, 5).unwrap();
            prop_assert!(
                (0.0..=1.0).contains(&bal),
                "FALSIFIED: balanced accuracy={} not in [0,1]", bal
            );
        }

        #[test]
        fn falsify_prop_mcc_bounded((y_pred, y_true) in labels(5)) {
            let mcc = matthews_corrcoef(&y_pred, &y_true, 5).unwrap();
            prop_assert!(
                (-1.0 - 1e-12..=1.0 + 1e-12).contains(&mcc),
                "FALSIFIED: MCC={} not in [-1,1]", mcc
            );
        }

        #[test]
        fn falsify_prop_confusion_matrix_conserves_samples((y_pred, y_true) in labels(4)) {
            let cm = ConfusionMatrix::from_labels(&y_pred, &y_true, 4).unwrap();
            prop_assert_eq!(cm.total(), y_true.len());
            prop_assert_eq!(cm.row_sums().iter().sum::<usize>(), y_true.len());
            prop_assert_eq!(cm.col_sums().iter().sum::<usize>(), y_pred.len());
        }
    }
}
