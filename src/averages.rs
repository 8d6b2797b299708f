use tracing::info;

use crate::compute::{Method, Observable};

/// Block and run accumulators for the observable stream.
///
/// Observables tagged [`Method::Average`] contribute their block mean to the
/// run average; observables tagged [`Method::Msd`] contribute their
/// within-block variance instead, which is how fluctuation estimators such
/// as heat capacities are formed.
pub struct Averages {
    names: Vec<&'static str>,
    methods: Vec<Method>,
    blk_avg: Vec<f64>,
    blk_msd: Vec<f64>,
    blk_nrm: f64,
    run_avg: Vec<f64>,
    run_err: Vec<f64>,
    run_nrm: f64,
}
impl Averages {
    /// Fix the observable list for the run and write column headings
    pub fn run_begin(observables: &[Observable]) -> Self {
        let names: Vec<_> = observables.iter().map(|o| o.name).collect();
        let methods: Vec<_> = observables.iter().map(|o| o.method).collect();
        let count = names.len();

        let mut heading = format!("{:>8}", "Block");
        for name in &names {
            heading.push_str(&format!(" {:>16}", name));
        }
        info!("{}", heading);

        Self {
            names,
            methods,
            blk_avg: vec![0.0; count],
            blk_msd: vec![0.0; count],
            blk_nrm: 0.0,
            run_avg: vec![0.0; count],
            run_err: vec![0.0; count],
            run_nrm: 0.0,
        }
    }

    /// Zero the block accumulators
    pub fn blk_begin(&mut self) {
        self.blk_avg.iter_mut().for_each(|x| *x = 0.0);
        self.blk_msd.iter_mut().for_each(|x| *x = 0.0);
        self.blk_nrm = 0.0;
    }

    /// Accumulate one step's observables into the current block
    pub fn blk_add(&mut self, observables: &[Observable]) {
        assert_eq!(
            observables.len(),
            self.names.len(),
            "Observable count should match the run_begin list",
        );
        for (i, o) in observables.iter().enumerate() {
            self.blk_avg[i] += o.value;
            self.blk_msd[i] += o.value * o.value;
        }
        self.blk_nrm += 1.0;
    }

    /// Close the block: normalize, convert Msd observables to within-block
    /// variance, fold into the run accumulators, and write the block line
    pub fn blk_end(&mut self, blk: usize) {
        assert!(self.blk_nrm > 0.5, "Block accumulation error");
        let mut line = format!("{:>8}", blk);
        for i in 0..self.names.len() {
            let avg = self.blk_avg[i] / self.blk_nrm;
            let msd = self.blk_msd[i] / self.blk_nrm;
            let value = match self.methods[i] {
                Method::Average => avg,
                Method::Msd => msd - avg * avg,
            };
            self.run_avg[i] += value;
            self.run_err[i] += value * value;
            line.push_str(&format!(" {:>16.6}", value));
        }
        self.run_nrm += 1.0;
        info!("{}", line);
    }

    /// Close the run and write averages with error estimates
    pub fn run_end(&mut self) {
        let mut avg_line = format!("{:>8}", "Run avg");
        let mut err_line = format!("{:>8}", "Run err");
        for (_name, avg, err) in self.run_averages() {
            avg_line.push_str(&format!(" {:>16.6}", avg));
            err_line.push_str(&format!(" {:>16.6}", err));
        }
        info!("{}", avg_line);
        info!("{}", err_line);
    }

    /// Run averages and error estimates (standard error over block values)
    pub fn run_averages(&self) -> Vec<(&'static str, f64, f64)> {
        assert!(self.run_nrm > 0.5, "Run accumulation error");
        self.names
            .iter()
            .enumerate()
            .map(|(i, &name)| {
                let avg = self.run_avg[i] / self.run_nrm;
                let variance = (self.run_err[i] / self.run_nrm - avg * avg).max(0.0);
                (name, avg, (variance / self.run_nrm).sqrt())
            })
            .collect()
    }
}

/// Write instantaneous values with a label, skipping Msd observables, which
/// are only meaningful as block variances
pub fn log_instant(label: &str, observables: &[Observable]) {
    info!("{}", label);
    for o in observables {
        if o.method == Method::Average {
            info!("{:<24}{:>16.6}", o.name, o.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observable(name: &'static str, value: f64, method: Method) -> Observable {
        Observable {
            name,
            value,
            method,
        }
    }

    #[test]
    fn average_observable_reports_the_block_mean() {
        let start = [observable("x", 0.0, Method::Average)];
        let mut averages = Averages::run_begin(&start);
        averages.blk_begin();
        for value in [1.0, 2.0, 3.0, 4.0] {
            averages.blk_add(&[observable("x", value, Method::Average)]);
        }
        averages.blk_end(1);
        let (_, avg, err) = averages.run_averages()[0];
        assert!((avg - 2.5).abs() < 1e-14);
        assert_eq!(err, 0.0); // single block: no spread
    }

    #[test]
    fn msd_observable_reports_the_block_variance() {
        let start = [observable("c", 0.0, Method::Msd)];
        let mut averages = Averages::run_begin(&start);
        averages.blk_begin();
        // Alternating +-1: mean 0, mean square 1, variance 1
        for step in 0..100 {
            let value = if step % 2 == 0 { 1.0 } else { -1.0 };
            averages.blk_add(&[observable("c", value, Method::Msd)]);
        }
        averages.blk_end(1);
        let (_, avg, _) = averages.run_averages()[0];
        assert!((avg - 1.0).abs() < 1e-14);
    }

    #[test]
    fn constant_msd_observable_has_zero_variance() {
        let start = [observable("c", 0.0, Method::Msd)];
        let mut averages = Averages::run_begin(&start);
        averages.blk_begin();
        for _ in 0..10 {
            averages.blk_add(&[observable("c", 5.0, Method::Msd)]);
        }
        averages.blk_end(1);
        let (_, avg, _) = averages.run_averages()[0];
        assert!(avg.abs() < 1e-12);
    }

    #[test]
    fn run_error_measures_spread_over_blocks() {
        let start = [observable("x", 0.0, Method::Average)];
        let mut averages = Averages::run_begin(&start);
        for (blk, value) in [(1, 1.0), (2, 3.0)] {
            averages.blk_begin();
            averages.blk_add(&[observable("x", value, Method::Average)]);
            averages.blk_end(blk);
        }
        let (_, avg, err) = averages.run_averages()[0];
        assert!((avg - 2.0).abs() < 1e-14);
        // Block values 1 and 3: variance 1, over 2 blocks
        assert!((err - (0.5_f64).sqrt()).abs() < 1e-14);
    }
}
