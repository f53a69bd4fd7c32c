use super::evolution_engine::{GenerationReport, ProgressCallback};
use super::genome::Genome;

/// Ignores all progress
pub struct SilentProgressCallback;

impl ProgressCallback for SilentProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, _report: &GenerationReport<'_>) {}

    fn on_offspring_evaluated(&mut self, _evaluated: usize, _total: usize) {}
}

/// Forwards progress to the `log` facade
pub struct LogProgressCallback;

impl ProgressCallback for LogProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::trace!("Generation {} starting...", generation);
    }

    fn on_generation_complete(&mut self, report: &GenerationReport<'_>) {
        if report.generation == 1 {
            for (i, genome) in report.population.iter().enumerate() {
                log::trace!("Individual {}: {} fitness: {:?}", i, genome, genome.fitness());
            }
        }

        log::debug!(
            "{}: Best: {} fitness: {:.4} (offspring {}, skipped crossovers {})",
            report.generation,
            report.best,
            report.best.score(),
            report.offspring,
            report.skipped_crossovers
        );
    }

    fn on_offspring_evaluated(&mut self, evaluated: usize, total: usize) {
        log::trace!("  Evaluated {} offspring ({} evaluations so far)", evaluated, total);
    }
}

// For handing progress to another thread
pub struct ChannelProgressCallback {
    sender: std::sync::mpsc::Sender<ProgressMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete {
        generation: usize,
        best: Genome,
        population: Vec<Genome>,
    },
    OffspringEvaluated { evaluated: usize, total: usize },
}

impl ChannelProgressCallback {
    pub fn new(sender: std::sync::mpsc::Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, report: &GenerationReport<'_>) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation: report.generation,
            best: report.best.clone(),
            population: report.population.to_vec(),
        });
    }

    fn on_offspring_evaluated(&mut self, evaluated: usize, total: usize) {
        let _ = self.sender.send(ProgressMessage::OffspringEvaluated { evaluated, total });
    }
}
