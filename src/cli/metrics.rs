//! Installation-wide usage metrics

use structopt::StructOpt;

use crate::client::BaseClient;
use crate::metrics_api::{self, MetricsKind};

use super::base::{block_on, evaluate_and_print_response, Matcher};

#[derive(StructOpt, Debug)]
#[structopt(about = "Count dataverses, datasets, files or downloads")]
pub enum MetricsSubCommand {
    #[structopt(about = "All-time total")]
    Total {
        #[structopt(help = "dataverses, datasets, files or downloads")]
        kind: MetricsKind,
    },

    #[structopt(about = "Total up to the end of a month")]
    ToMonth {
        #[structopt(help = "dataverses, datasets, files or downloads")]
        kind: MetricsKind,

        #[structopt(help = "Month in YYYY-MM form")]
        month: String,
    },

    #[structopt(about = "Added during the last days")]
    PastDays {
        #[structopt(help = "dataverses, datasets, files or downloads")]
        kind: MetricsKind,

        #[structopt(help = "Number of days")]
        days: u32,
    },
}

impl Matcher for MetricsSubCommand {
    fn process(self, client: &BaseClient) {
        let response = match self {
            MetricsSubCommand::Total { kind } => block_on(metrics_api::metrics_total(client, kind)),
            MetricsSubCommand::ToMonth { kind, month } => {
                block_on(metrics_api::metrics_to_month(client, kind, &month))
            }
            MetricsSubCommand::PastDays { kind, days } => {
                block_on(metrics_api::metrics_past_days(client, kind, days))
            }
        };

        evaluate_and_print_response(response);
    }
}
