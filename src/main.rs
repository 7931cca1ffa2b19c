use std::error::Error;
use std::fs;
use std::io::Write;

use env_logger::Builder;

use u_cpusched::generator::fixtures;
use u_cpusched::models::Workload;
use u_cpusched::report::MetricTable;
use u_cpusched::suite::{Comparison, SuiteConfig};

fn main() -> Result<(), Box<dyn Error>> {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let config = SuiteConfig::from_env();
    let comparison = Comparison::standard(config.quantum);

    let runs: Vec<(String, Workload)> = match std::env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)?;
            let workload: Workload = serde_json::from_str(&text)?;
            vec![(path, workload)]
        }
        None => vec![
            ("Basic Test".to_string(), fixtures::basic()),
            (
                "Large Scale Test".to_string(),
                fixtures::random(config.random_count, config.seed)?,
            ),
            ("Edge Case Test".to_string(), fixtures::uniform_arrivals()),
        ],
    };

    for (title, workload) in runs {
        log::info!(
            "running {title}: {} processes, first arrival t={}, avg burst {:.2}",
            workload.len(),
            workload.first_arrival(),
            workload.average_burst_time()
        );
        let table = MetricTable::new(title, comparison.run_parallel(&workload));
        println!("{table}");
        if let Some(best) = table.best_by_waiting_time() {
            println!(
                "Best avg waiting time: {} ({:.2})\n",
                best.name, best.avg_waiting_time
            );
        }
    }

    Ok(())
}
