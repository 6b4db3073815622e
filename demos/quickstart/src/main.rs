//! Quickstart Example
//!
//! Walks through the whole planner surface without a UI:
//! - Pull feasibility from a wallet and target
//! - Crit score derivation
//! - A material checklist saved and reloaded through the store
//! - Export to a JSON document and back

use pullplan_core::{CalculatorInputs, Checklist, CritInputs, GuaranteeMode, MaterialRequirement};
use pullplan_data::Catalog;
use pullplan_exchange::{import_str, ExportFormat, Exporter};
use pullplan_store::Store;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Pullplan Quickstart ===\n");

    // Everything stateful runs against an in-memory store here; swap in
    // Store::open("pullplan.db") for a durable one.
    let store = Store::in_memory()?;

    // --- Pull feasibility ---

    let calc = CalculatorInputs {
        gems: "0".to_string(),
        fates: "10".to_string(),
        pity: "0".to_string(),
        target_pulls: "90".to_string(),
        guarantee: GuaranteeMode::Off,
    };
    let report = calc.report();

    println!("Planning {} pulls with {} gems and {} fates:", calc.target_pulls, calc.gems, calc.fates);
    println!("  Required gems:     {}", report.required_gems);
    println!("  Shortfall:         {}", report.shortfall);
    println!("  Convertible pulls: {}", report.convertible_pulls);
    println!("  Feasible:          {}", if report.feasible { "yes" } else { "no" });

    println!("\nMilestones:");
    for milestone in &report.milestones {
        match milestone.odds {
            Some(odds) => println!("  {:>3} pulls - reachable ({odds})", milestone.pulls),
            None => println!("  {:>3} pulls - out of reach", milestone.pulls),
        }
    }

    // The fields persist as entered, numbers only parse at calculation time.
    store.save_calculator(&calc)?;
    let restored = store.load_calculator()?;
    println!("\nReloaded calculator target: {} pulls", restored.target_pulls);

    // --- Crit score ---

    println!("\n=== Crit Score ===\n");

    // Comma decimals are accepted.
    let crit = CritInputs::new("25,5", "15.0");
    let score = crit.evaluate()?;
    println!("Crit rate 25.5 / damage 15.0 -> value {:.2}, tier {}", score.value, score.tier);

    // Bad text errors instead of computing a wrong score.
    if let Err(err) = CritInputs::new("not a number", "15").evaluate() {
        println!("Rejected input: {err}");
    }

    // --- Material checklist ---

    println!("\n=== Material Checklist ===\n");

    let mut catalog = Catalog::new();
    catalog.insert(
        "Ayaka",
        vec![
            MaterialRequirement::new("Shivada Jade Sliver", "Gems", 1),
            MaterialRequirement::new("Shivada Jade Fragment", "Gems", 9),
            MaterialRequirement::new("Sakura Bloom", "Local Specialty", 168),
        ],
    )?;

    let requirements = catalog.materials_for("Ayaka").unwrap();
    let mut checklist = Checklist::new("Ayaka");
    checklist.set_owned("Shivada Jade Sliver", "1");
    checklist.set_owned("Sakura Bloom", "42");

    for requirement in requirements {
        println!(
            "  {:<24} {:>3} / {:<3} ({} more)",
            requirement.name,
            checklist.owned(&requirement.name),
            requirement.required,
            checklist.remaining_for(requirement),
        );
    }
    let summary = checklist.summary(requirements);
    println!("  Progress: {}/{} ({}%)", summary.completed, summary.total, summary.percentage);

    // Each character keeps its own row in the store.
    store.character("Ayaka").save(&checklist.owned)?;
    let reloaded = store.character("Ayaka").load()?;
    println!("  Reloaded owned Sakura Bloom: {}", reloaded["Sakura Bloom"]);

    // --- Export / import ---

    println!("\n=== Export / Import ===\n");

    let json = Exporter::new(&calc).export(ExportFormat::Json)?;
    println!("{json}\n");

    let imported = import_str(&json)?;
    println!("Imported target pulls: {}", imported.target_pulls);

    Ok(())
}
