//! CSV output format for sampler runs

use crate::bottleneck::Bottleneck;
use crate::bottleneck_history::BottleneckHistogram;
use crate::sample::{FrameSample, SampleField};

/// CSV record for one emitted tick.
#[derive(Debug, Clone)]
pub struct CsvTick {
    pub tick: u64,
    pub average: FrameSample,
    pub bottleneck: Bottleneck,
}

/// CSV timeline formatter: one row per emitted tick.
#[derive(Debug, Default)]
pub struct CsvTimeline {
    ticks: Vec<CsvTick>,
}

impl CsvTimeline {
    /// Create an empty timeline formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one tick row.
    pub fn add_tick(&mut self, tick: u64, average: FrameSample, bottleneck: Bottleneck) {
        self.ticks.push(CsvTick {
            tick,
            average,
            bottleneck,
        });
    }

    /// Generate the CSV header row.
    fn header() -> String {
        let mut headers = vec!["tick"];
        for field in SampleField::ALL {
            headers.push(field.label());
        }
        headers.push("bottleneck");
        headers.join(",")
    }

    /// Escape a CSV field (handle commas, quotes, newlines).
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Format one tick as a CSV row.
    fn format_tick(tick: &CsvTick) -> String {
        let mut fields = vec![tick.tick.to_string()];
        for field in SampleField::ALL {
            fields.push(format!("{:.3}", tick.average.field(field)));
        }
        fields.push(Self::escape_field(tick.bottleneck.label()));
        fields.join(",")
    }

    /// Generate CSV output as a string.
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(&Self::header());
        output.push('\n');

        for tick in &self.ticks {
            output.push_str(&Self::format_tick(tick));
            output.push('\n');
        }

        output
    }
}

/// CSV summary formatter (for -c mode): per-channel statistics followed by
/// the bottleneck distribution.
#[derive(Debug, Default)]
pub struct CsvSummaryOutput {
    channels: Vec<CsvChannelStat>,
    histogram: Option<BottleneckHistogram>,
}

/// Min/avg/max of one timing channel over the final window.
#[derive(Debug, Clone)]
pub struct CsvChannelStat {
    pub channel: &'static str,
    pub min: f32,
    pub average: f32,
    pub max: f32,
}

impl CsvSummaryOutput {
    /// Create an empty summary formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add per-channel statistics from the three aggregates.
    pub fn add_aggregates(&mut self, min: FrameSample, average: FrameSample, max: FrameSample) {
        for field in SampleField::ALL {
            self.channels.push(CsvChannelStat {
                channel: field.label(),
                min: min.field(field),
                average: average.field(field),
                max: max.field(field),
            });
        }
    }

    /// Set the bottleneck distribution table.
    pub fn set_histogram(&mut self, histogram: BottleneckHistogram) {
        self.histogram = Some(histogram);
    }

    /// Generate CSV output for the summary.
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str("channel,min,avg,max\n");
        for stat in &self.channels {
            output.push_str(&format!(
                "{},{:.3},{:.3},{:.3}\n",
                stat.channel, stat.min, stat.average, stat.max
            ));
        }

        if let Some(histogram) = self.histogram {
            output.push('\n');
            output.push_str("bottleneck,share\n");
            output.push_str(&format!("gpu,{:.4}\n", histogram.gpu));
            output.push_str(&format!("cpu,{:.4}\n", histogram.cpu));
            output.push_str(&format!(
                "present-limited,{:.4}\n",
                histogram.present_limited
            ));
            output.push_str(&format!("balanced,{:.4}\n", histogram.balanced));
        }

        output
    }
}
