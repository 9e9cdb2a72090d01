//! Two-pass greedy assignment of ranked choices to cartridge slots.

use std::fmt::Debug;

use log::{debug, info};

use super::cartridge::CartridgeInventory;
use super::choice::SurveyRequests;
use super::plan::{AssignmentReport, Placement, PlugPlan, Unplaced};

/// Assigns every survey's ranked choices to cartridges.
///
/// Surveys are processed in the order given, which must be the configured
/// priority order. For each survey two passes run over its choice list:
///
/// 1. **Continuity pass** - a choice whose `keep_cart` hint names a free,
///    eligible cartridge still holding that very plate is kept where it is,
///    avoiding a physical replug.
/// 2. **Fallback pass** - every remaining choice, in list order, claims the
///    first free eligible cartridge in id order. Choices with nowhere to go
///    are collected in the report's unplaced summary; running out of slots
///    is expected on busy nights, not an error.
///
/// The algorithm is strictly greedy: a continuity match is never undone to
/// free a slot for a later survey, and no backtracking or global
/// optimisation takes place. All iteration is over ordered lists, so
/// identical inputs produce identical output.
///
/// The inventory is mutated in place; after the call each filled
/// cartridge's `current` matches the returned plan.
pub fn assign<S>(
    inventory: &mut CartridgeInventory<S>,
    requests: &[SurveyRequests<S>],
) -> AssignmentReport<S>
where
    S: Copy + PartialEq + Debug,
{
    let mut plan = PlugPlan::new();
    let mut unplaced = Vec::new();

    for request in requests {
        let survey = request.survey;
        let mut placed = vec![false; request.choices.len()];

        // Continuity pass: keep what is already mounted.
        for (rank, choice) in request.choices.iter().enumerate() {
            let Some(hint) = choice.keep_cart else {
                continue;
            };
            if plan.contains_plate(choice.plate) {
                placed[rank] = true;
                continue;
            }
            let Some(cart) = inventory.get_mut(hint) else {
                continue;
            };
            if cart.is_free() && cart.previous() == Some(choice.plate) && cart.accepts(&survey) {
                cart.mount(choice.plate);
                debug!(
                    "keeping plate {} in cartridge {} ({:?})",
                    choice.plate,
                    cart.id(),
                    survey
                );
                plan.insert(
                    cart.id(),
                    Placement {
                        survey,
                        choice: choice.clone(),
                    },
                );
                placed[rank] = true;
            }
        }

        // Fallback pass: earlier choices get first pick of the remaining
        // slots, scanned in cartridge-id order.
        for (rank, choice) in request.choices.iter().enumerate() {
            if placed[rank] {
                continue;
            }
            if plan.contains_plate(choice.plate) {
                debug!(
                    "plate {} already mounted, skipping duplicate choice ({:?})",
                    choice.plate, survey
                );
                continue;
            }
            match inventory
                .iter_mut()
                .find(|cart| cart.is_free() && cart.accepts(&survey))
            {
                Some(cart) => {
                    cart.mount(choice.plate);
                    debug!(
                        "plugging plate {} into cartridge {} ({:?})",
                        choice.plate,
                        cart.id(),
                        survey
                    );
                    plan.insert(
                        cart.id(),
                        Placement {
                            survey,
                            choice: choice.clone(),
                        },
                    );
                }
                None => {
                    debug!(
                        "no free cartridge left for plate {} ({:?})",
                        choice.plate, survey
                    );
                    unplaced.push(Unplaced {
                        survey,
                        plate: choice.plate,
                    });
                }
            }
        }
    }

    info!(
        "assigned {} plates to {} cartridges, {} choices unplaced",
        plan.placed_count(),
        inventory.len(),
        unplaced.len()
    );

    AssignmentReport { plan, unplaced }
}
