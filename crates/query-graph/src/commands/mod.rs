mod transitions;

use crate::Cli;
use crate::CommandResult;
use transitions::TransitionsCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "query-graph")]
pub(crate) enum CommandEnum {
    /// Print every transition the types of a GraphQL schema expose.
    Transitions(Box<TransitionsCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Transitions(cmd) => cmd.run(cli).await
        }
    }
}
