//! Text rendering of simulation results.
//!
//! - [`render_results`]: per-process turnaround and waiting times
//! - [`render_metrics_table`]: one metrics row per algorithm
//! - [`render_chart`]: horizontal bar chart of the headline metrics
//! - [`render_timeline`]: Gantt-style slice listing

use crate::models::Tick;
use crate::simulation::{AlgorithmRun, SimulationReport};

const CHART_LABELS: [&str; 3] = ["Average TAT", "Average WT", "CPU Utilization"];
const BAR: char = '█';

/// Per-process results in completion order.
///
/// ```text
/// FCFS Scheduling:
/// P0: TAT=5, WT=0
/// P1: TAT=7, WT=4
/// ```
pub fn render_results(run: &AlgorithmRun) -> String {
    let mut out = format!("{} Scheduling:\n", run.name);
    for p in &run.schedule.completed {
        out.push_str(&format!(
            "P{}: TAT={}, WT={}\n",
            p.id, p.turnaround_time, p.waiting_time
        ));
    }
    out
}

/// One row per algorithm with the headline metrics to two decimals.
pub fn render_metrics_table(report: &SimulationReport) -> String {
    let name_width = report
        .runs
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0)
        .max("Algorithm".len());

    let mut out = format!(
        "{:<name_width$}  {:>10}  {:>10}  {:>10}  {:>8}\n",
        "Algorithm", "Avg TAT", "Avg WT", "CPU Util", "Busy %"
    );
    for run in &report.runs {
        let m = &run.metrics;
        out.push_str(&format!(
            "{:<name_width$}  {:>10.2}  {:>10.2}  {:>10.2}  {:>8.1}\n",
            run.name,
            m.avg_turnaround,
            m.avg_waiting,
            m.cpu_utilization,
            m.busy_fraction * 100.0
        ));
    }
    out
}

/// Horizontal bar chart of the three headline metrics per algorithm.
///
/// Bars share one scale (the largest value in the report) so algorithms
/// can be compared at a glance. `width` is the length of the longest bar.
pub fn render_chart(report: &SimulationReport, width: usize) -> String {
    let max = report
        .runs
        .iter()
        .flat_map(|r| {
            let (tat, wt, util) = r.metrics.headline();
            [tat, wt, util]
        })
        .fold(0.0_f64, f64::max);
    let label_width = CHART_LABELS.iter().map(|l| l.len()).max().unwrap_or(0);

    let mut out = String::new();
    for run in &report.runs {
        out.push_str(&format!("{}\n", run.name));
        let (tat, wt, util) = run.metrics.headline();
        for (label, value) in CHART_LABELS.iter().zip([tat, wt, util]) {
            let bar: String = std::iter::repeat(BAR).take(bar_length(value, max, width)).collect();
            out.push_str(&format!(
                "  {label:<label_width$} | {bar:<width$} {value:.2}\n"
            ));
        }
    }
    out
}

fn bar_length(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max) * width as f64).round() as usize
}

/// Gantt-style listing of CPU slices, including idle gaps.
///
/// ```text
/// Round Robin: [0-2] P0 [2-4] P1 [4-6] idle [6-9] P0
/// ```
pub fn render_timeline(run: &AlgorithmRun) -> String {
    let mut out = format!("{}:", run.name);
    let mut cursor: Tick = 0;
    for slice in &run.schedule.slices {
        if slice.start > cursor {
            out.push_str(&format!(" [{cursor}-{}] idle", slice.start));
        }
        out.push_str(&format!(" [{}-{}] P{}", slice.start, slice.end, slice.pid));
        cursor = slice.end;
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::models::Process;
    use crate::scheduler::AlgorithmKind;
    use crate::simulation::Simulation;

    fn report_for(algorithms: Vec<AlgorithmKind>, processes: &[Process]) -> SimulationReport {
        Simulation::new(SimulationConfig::default().with_algorithms(algorithms).with_time_quantum(2))
            .unwrap()
            .run(processes)
            .unwrap()
    }

    fn sample() -> Vec<Process> {
        vec![
            Process::new(0, 0, 5),
            Process::new(1, 1, 3),
            Process::new(2, 2, 8),
        ]
    }

    #[test]
    fn test_render_results() {
        let report = report_for(vec![AlgorithmKind::Fcfs], &sample());
        assert_eq!(
            render_results(&report.runs[0]),
            "FCFS Scheduling:\nP0: TAT=5, WT=0\nP1: TAT=7, WT=4\nP2: TAT=14, WT=6\n"
        );
    }

    #[test]
    fn test_render_results_completion_order() {
        let report = report_for(vec![AlgorithmKind::RoundRobin], &sample());
        let text = render_results(&report.runs[0]);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Round Robin Scheduling:");
        assert!(lines[1].starts_with("P1:"));
        assert!(lines[2].starts_with("P0:"));
        assert!(lines[3].starts_with("P2:"));
    }

    #[test]
    fn test_render_metrics_table() {
        let report = report_for(vec![AlgorithmKind::Fcfs, AlgorithmKind::SjfPreemptive], &sample());
        let table = render_metrics_table(&report);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Algorithm"));
        assert!(lines[1].starts_with("FCFS"));
        assert!(lines[1].contains("8.67")); // avg TAT 26/3
        assert!(lines[1].contains("3.33")); // avg WT 10/3
        assert!(lines[2].starts_with("SJF Preemptive"));
    }

    #[test]
    fn test_render_chart_scales_to_max() {
        let report = report_for(vec![AlgorithmKind::Fcfs], &sample());
        let chart = render_chart(&report, 20);
        let lines: Vec<_> = chart.lines().collect();

        assert_eq!(lines[0], "FCFS");
        // utilization is the largest value and gets the full bar
        let util_bars = lines[3].chars().filter(|&c| c == BAR).count();
        let tat_bars = lines[1].chars().filter(|&c| c == BAR).count();
        assert_eq!(util_bars, 20);
        assert!(tat_bars < util_bars);
        assert!(lines[3].trim_end().ends_with("184.62"));
    }

    #[test]
    fn test_render_chart_empty_input() {
        let report = report_for(vec![AlgorithmKind::Fcfs], &[]);
        let chart = render_chart(&report, 10);
        assert!(!chart.contains(BAR));
        assert!(chart.contains("0.00"));
    }

    #[test]
    fn test_render_timeline_with_idle() {
        let processes = vec![Process::new(0, 1, 2), Process::new(1, 6, 1)];
        let report = report_for(vec![AlgorithmKind::Fcfs], &processes);
        assert_eq!(
            render_timeline(&report.runs[0]),
            "FCFS: [0-1] idle [1-3] P0 [3-6] idle [6-7] P1\n"
        );
    }

    #[test]
    fn test_bar_length() {
        assert_eq!(bar_length(5.0, 10.0, 20), 10);
        assert_eq!(bar_length(0.0, 10.0, 20), 0);
        assert_eq!(bar_length(3.0, 0.0, 20), 0);
    }
}
