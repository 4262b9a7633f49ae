mod common;

use std::collections::{HashMap, HashSet};

use diesel::prelude::*;
use proptest::prelude::*;

use catalog_core::goods::{
    GoodError, GoodsRepository, GoodsRepositoryTrait, NewGood, ReprioritizeRequest,
};
use catalog_core::schema::goods::dsl;

#[derive(Debug, Clone)]
enum Op {
    Create {
        project: i32,
    },
    Reprioritize {
        project: i32,
        slot: usize,
        new_priority: i32,
    },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1..4i32).prop_map(|project| Op::Create { project }),
        (1..4i32, 0..8usize, 1..10i32).prop_map(|(project, slot, new_priority)| {
            Op::Reprioritize {
                project,
                slot,
                new_priority,
            }
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Drives arbitrary create/reprioritize sequences against a fresh store
    /// and checks after every step that no two goods in a project ever share
    /// a priority, and that creates always take the next free slot.
    #[test]
    fn priorities_stay_unique_per_project(ops in prop::collection::vec(op_strategy(), 1..12)) {
        let db = common::setup();
        let repo = GoodsRepository::new(db.pool.clone());

        let mut created: HashMap<i32, Vec<i32>> = HashMap::new();
        let mut max_priority: HashMap<i32, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Create { project } => {
                    let good = repo
                        .create(NewGood {
                            project_id: project,
                            name: "item".to_string(),
                        })
                        .unwrap();

                    let prev = max_priority.entry(project).or_insert(0);
                    prop_assert_eq!(good.priority, *prev + 1);
                    *prev = good.priority;
                    created.entry(project).or_default().push(good.id);
                }
                Op::Reprioritize { project, slot, new_priority } => {
                    let ids = match created.get(&project) {
                        Some(ids) if !ids.is_empty() => ids,
                        _ => continue,
                    };
                    let id = ids[slot % ids.len()];

                    let request = ReprioritizeRequest {
                        id,
                        project_id: project,
                        new_priority,
                    };
                    match repo.reprioritize(request) {
                        Ok(_) => {}
                        Err(GoodError::MaxPriorityExceeded { .. })
                        | Err(GoodError::PriorityUnchanged(_))
                        | Err(GoodError::NotFound(_)) => {}
                        Err(other) => prop_assert!(false, "unexpected error: {}", other),
                    }
                }
            }

            let mut conn = catalog_core::db::get_connection(&db.pool).unwrap();
            let rows: Vec<(i32, i32)> = dsl::goods
                .select((dsl::project_id, dsl::priority))
                .load(&mut conn)
                .unwrap();

            let mut seen = HashSet::new();
            for (project, priority) in rows {
                prop_assert!(
                    seen.insert((project, priority)),
                    "duplicate priority {} in project {}",
                    priority,
                    project
                );
            }
        }
    }
}
