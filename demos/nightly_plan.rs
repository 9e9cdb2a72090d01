//! Example demonstrating a full nightly planning run.
//!
//! Run with: `cargo run --example nightly_plan`

use plugsched::assignment::{
    Cartridge, CartridgeId, CartridgeInventory, ChoiceRecord, EligibilityTier, PlateId,
    SurveyRequests,
};
use plugsched::cyclic::CyclicInterval;
use plugsched::nightly::{plan_night, NightSchedule, Period};
use plugsched::window::{Dither, Exposure, ExposureSet, WindowMode};
use qtty::Quantity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Survey {
    Infrared,
    Ifu,
    Spectro,
}

fn main() {
    println!("=== Nightly Plan Example ===\n");

    // A field that already has two dithered exposures: how much hour angle
    // is left for tonight?
    let set = ExposureSet::new(
        Quantity::new(184.2),
        vec![
            Exposure::new("e1", CyclicInterval::from_f64(352.5, 7.5), Dither::North, 1.2),
            Exposure::new("e2", CyclicInterval::from_f64(7.5, 22.5), Dither::South, 1.4),
        ],
    )
    .expect("set has exposures");

    println!("--- Field Windows ---");
    println!(
        "HA window:     {}",
        set.ha_window(WindowMode::Extremes).unwrap()
    );
    println!("LST window:    {}", set.lst_window().unwrap());
    println!(
        "Missing dithers: {:?}",
        set.missing_dithers(&[Dither::North, Dither::South, Dither::East])
    );

    // Tonight's schedule: bright time first, then the two dark-time surveys.
    let schedule = NightSchedule::new(57274)
        .award(Survey::Infrared, Period::from_mjd(57274.60, 57274.78))
        .award(Survey::Ifu, Period::from_mjd(57274.78, 57274.95))
        .award(Survey::Spectro, Period::from_mjd(57274.95, 57275.05));

    // The cartridge pool: two dedicated infrared slots, two shared dark-time
    // slots, and one fully flexible cartridge. Plates 8423 and 9102 are
    // still mounted from last night.
    let mut inventory = CartridgeInventory::new(vec![
        Cartridge::new(CartridgeId(1), EligibilityTier::Dedicated(Survey::Infrared)),
        Cartridge::new(CartridgeId(2), EligibilityTier::Universal).with_previous(PlateId(9102)),
        Cartridge::new(CartridgeId(3), EligibilityTier::Dedicated(Survey::Infrared))
            .with_previous(PlateId(8423)),
        Cartridge::new(
            CartridgeId(10),
            EligibilityTier::Shared(vec![Survey::Ifu, Survey::Spectro]),
        ),
        Cartridge::new(
            CartridgeId(11),
            EligibilityTier::Shared(vec![Survey::Ifu, Survey::Spectro]),
        ),
    ])
    .expect("valid inventory");

    // Ranked choices from the per-survey planners.
    let requests = [
        SurveyRequests::new(
            Survey::Infrared,
            vec![
                ChoiceRecord::new(PlateId(8423))
                    .keep_in(CartridgeId(3))
                    .with_timing(Quantity::new(57274.62), Quantity::new(500.0)),
                ChoiceRecord::new(PlateId(8430)).with_backups(vec![PlateId(8451)]),
            ],
        ),
        SurveyRequests::new(
            Survey::Ifu,
            vec![ChoiceRecord::new(PlateId(9102)).keep_in(CartridgeId(2))],
        ),
        SurveyRequests::new(
            Survey::Spectro,
            vec![
                ChoiceRecord::new(PlateId(7340)),
                ChoiceRecord::new(PlateId(7355)),
                ChoiceRecord::new(PlateId(7361)),
            ],
        ),
    ];

    let plan = plan_night(schedule, &mut inventory, &requests);

    println!("\n--- Plug Plan (mjd={}) ---", plan.mjd());
    for cart in inventory.iter() {
        match plan.report.plan.get(cart.id()) {
            Some(placement) => {
                let kept = cart.previous() == Some(placement.choice.plate);
                println!(
                    "cart {:>2}: plate {} ({:?}){}",
                    cart.id(),
                    placement.choice.plate,
                    placement.survey,
                    if kept { " [kept]" } else { "" }
                );
            }
            None => println!("cart {:>2}: empty", cart.id()),
        }
    }

    println!("\n--- Unplaced ---");
    if plan.report.unplaced.is_empty() {
        println!("every choice found a cartridge");
    }
    for unplaced in &plan.report.unplaced {
        println!("plate {} ({:?})", unplaced.plate, unplaced.survey);
    }
}
