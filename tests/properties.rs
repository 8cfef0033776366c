//! Property tests for batch scheduling and rod cutting.

use proptest::prelude::*;
use u_batch::models::{PriceTable, PrintJob, PrinterCapacity};
use u_batch::rod::{cut_rod_memo, cut_rod_table, CutCache};
use u_batch::scheduler::{admission_order, AdmissionPolicy, BatchRequest};
use u_batch::Error;

const MAX_VOLUME: f64 = 300.0;

fn arb_jobs() -> impl Strategy<Value = Vec<PrintJob>> {
    prop::collection::vec((1u32..=300, 1u32..=5, 1i64..=200), 0..30).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (volume, priority, time))| {
                PrintJob::new(format!("J{i}"), f64::from(volume), priority, time)
            })
            .collect()
    })
}

fn arb_prices() -> impl Strategy<Value = PriceTable> {
    prop::collection::vec(0i64..=100, 1..12).prop_map(PriceTable::new)
}

proptest! {
    #[test]
    fn runs_respect_capacity(jobs in arb_jobs(), max_items in 1usize..=4) {
        let cap = PrinterCapacity::new(MAX_VOLUME, max_items);
        let schedule = BatchRequest::new(jobs, cap).run().unwrap();
        for run in &schedule.runs {
            prop_assert!(run.item_count() <= max_items);
            prop_assert!(run.volume_used <= MAX_VOLUME + 1e-9);
            prop_assert!(!run.is_empty());
        }
        let expected: i64 = schedule.runs.iter().map(|r| r.run_time()).sum();
        prop_assert_eq!(schedule.total_time, expected);
    }

    #[test]
    fn every_job_admitted_once(jobs in arb_jobs(), max_items in 1usize..=4) {
        let cap = PrinterCapacity::new(MAX_VOLUME, max_items);
        let schedule = BatchRequest::new(jobs.clone(), cap).run().unwrap();

        let mut admitted = schedule.print_order.clone();
        admitted.sort();
        let mut input: Vec<String> = jobs.iter().map(|j| j.id.clone()).collect();
        input.sort();
        prop_assert_eq!(admitted, input);

        let in_runs: Vec<String> = schedule
            .runs
            .iter()
            .flat_map(|r| r.job_ids.iter().cloned())
            .collect();
        prop_assert_eq!(in_runs, schedule.print_order);
    }

    #[test]
    fn admission_is_stable_by_priority(jobs in arb_jobs()) {
        let order = admission_order(&jobs, AdmissionPolicy::RoundScan);
        for pair in order.windows(2) {
            let (a, b) = (&jobs[pair[0]], &jobs[pair[1]]);
            prop_assert!(a.priority < b.priority || (a.priority == b.priority && pair[0] < pair[1]));
        }
    }

    #[test]
    fn admission_orders_agree_for_any_priority(priorities in prop::collection::vec(0u32..=6, 0..30)) {
        let jobs: Vec<PrintJob> = priorities
            .iter()
            .enumerate()
            .map(|(i, &p)| PrintJob::new(format!("J{i}"), 1.0, p, 1))
            .collect();
        prop_assert_eq!(
            admission_order(&jobs, AdmissionPolicy::RoundScan),
            admission_order(&jobs, AdmissionPolicy::StableSort)
        );
    }

    #[test]
    fn policies_agree(jobs in arb_jobs(), max_items in 1usize..=4) {
        let cap = PrinterCapacity::new(MAX_VOLUME, max_items);
        let scan = BatchRequest::new(jobs.clone(), cap)
            .with_policy(AdmissionPolicy::RoundScan)
            .run()
            .unwrap();
        let sort = BatchRequest::new(jobs, cap)
            .with_policy(AdmissionPolicy::StableSort)
            .run()
            .unwrap();
        prop_assert_eq!(scan, sort);
    }

    #[test]
    fn oversized_job_fails(mut jobs in arb_jobs(), extra in 1u32..=100) {
        jobs.push(PrintJob::new("BIG", MAX_VOLUME + f64::from(extra), 1, 10));
        let result = BatchRequest::new(jobs, PrinterCapacity::new(MAX_VOLUME, 2)).run();
        let is_capacity_error = matches!(result, Err(Error::CapacityExceeded { .. }));
        prop_assert!(is_capacity_error);
    }

    #[test]
    fn solvers_agree_on_profit(length in 0i64..=40, prices in arb_prices()) {
        let memo = cut_rod_memo(length, &prices).unwrap();
        let table = cut_rod_table(length, &prices).unwrap();
        prop_assert_eq!(memo.profit, table.profit);
    }

    #[test]
    fn pieces_cover_rod(length in 0i64..=40, prices in arb_prices()) {
        for plan in [cut_rod_memo(length, &prices).unwrap(), cut_rod_table(length, &prices).unwrap()] {
            prop_assert_eq!(plan.total_length() as i64, length);
            prop_assert!(plan.pieces.iter().all(|&p| p >= 1 && p <= prices.len()));
            let priced: i64 = plan.pieces.iter().map(|&p| prices.as_slice()[p - 1]).sum();
            prop_assert_eq!(priced, plan.profit);
        }
    }

    #[test]
    fn shared_cache_matches_fresh_solve(lengths in prop::collection::vec(0i64..=30, 1..8), prices in arb_prices()) {
        let mut cache = CutCache::new();
        for length in lengths {
            let cached = cache.solve(length, &prices).unwrap();
            let fresh = cut_rod_memo(length, &prices).unwrap();
            prop_assert_eq!(cached, fresh);
        }
    }

    #[test]
    fn zero_length_is_empty(prices in prop::collection::vec(0i64..=100, 0..12)) {
        let prices = PriceTable::new(prices);
        let memo = cut_rod_memo(0, &prices).unwrap();
        let table = cut_rod_table(0, &prices).unwrap();
        prop_assert_eq!(memo.profit, 0);
        prop_assert!(memo.pieces.is_empty());
        prop_assert_eq!(table.profit, 0);
        prop_assert!(table.pieces.is_empty());
    }
}
