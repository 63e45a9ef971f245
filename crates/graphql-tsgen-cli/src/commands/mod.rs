mod generate;

use crate::Cli;
use crate::CommandResult;
use generate::GenerateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-tsgen")]
pub(crate) enum CommandEnum {
    /// Generate TypeScript declarations for GraphQL operation documents.
    Generate(Box<GenerateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await
        }
    }
}
