//! Interaction routing.
//!
//! Every slash command and message component the bot handles is a `Route`: a glob
//! pattern matched against the command name or component custom ID, the module it
//! belongs to, its preconditions, and the handler that runs it. A pattern is either
//! an exact literal or a literal prefix followed by a single trailing `*` wildcard.
//! When several patterns match, the one with the longest literal part wins, and an
//! exact match beats a prefix of the same length.
//!
//! Dispatch runs in a fixed order: resolve the route, check its preconditions,
//! decode its parameters, defer the interaction, then run the handler. Everything
//! before the deferral is cheap, so failures there still use the primary response.

use serenity::all::Permissions;

use crate::{
    bot::{
        command::{hello, self_assign, CommandModule},
        precondition::{self, Precondition},
        responder::InteractionResponder,
    },
    data::discord::GuildRoleRepository,
    error::command::CommandError,
    model::{CommandInvocation, InteractionData, Outcome, ResponseState, SelfAssignRequest},
    service::audit::AuditSink,
};

const WILDCARD: char = '*';

/// Glob pattern matched against interaction identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    Exact(String),
    Prefix(String),
}

impl RoutePattern {
    /// Parses a pattern, treating a trailing `*` as the wildcard segment.
    pub fn parse(pattern: &str) -> Self {
        match pattern.strip_suffix(WILDCARD) {
            Some(prefix) => Self::Prefix(prefix.to_string()),
            None => Self::Exact(pattern.to_string()),
        }
    }

    /// Matches an identifier against the pattern.
    ///
    /// # Returns
    /// - `Some(&str)` - The wildcard segment, empty for exact patterns
    /// - `None` - The identifier does not match
    pub fn matches<'i>(&self, identifier: &'i str) -> Option<&'i str> {
        match self {
            Self::Exact(literal) => (identifier == literal).then_some(""),
            Self::Prefix(prefix) => identifier.strip_prefix(prefix.as_str()),
        }
    }

    /// Ordering key for overlapping matches; higher is more specific.
    pub fn specificity(&self) -> (usize, bool) {
        match self {
            Self::Exact(literal) => (literal.len(), true),
            Self::Prefix(prefix) => (prefix.len(), false),
        }
    }
}

/// Handler a route dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteHandler {
    Hello,
    SelfAssignButton,
    SelfAssignSelect,
}

/// Parameters decoded for a handler before the interaction is deferred.
enum Params {
    None,
    Request(SelfAssignRequest),
    Entries(Vec<String>),
}

impl RouteHandler {
    fn decode(self, wildcard: &str, data: &InteractionData) -> Result<Params, CommandError> {
        match self {
            Self::Hello => Ok(Params::None),
            Self::SelfAssignButton => Ok(Params::Request(SelfAssignRequest::parse(wildcard)?)),
            Self::SelfAssignSelect => match data {
                InteractionData::SelectMenu { values } => Ok(Params::Entries(values.clone())),
                _ => Err(CommandError::BadArgs(
                    "Self-assign select menu sent no values".to_string(),
                )),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Route {
    pub pattern: RoutePattern,
    pub module: CommandModule,
    pub handler: RouteHandler,
    pub preconditions: Vec<Precondition>,
}

impl Route {
    pub fn new(pattern: &str, module: CommandModule, handler: RouteHandler) -> Self {
        Self {
            pattern: RoutePattern::parse(pattern),
            module,
            handler,
            preconditions: Vec::new(),
        }
    }

    pub fn require(mut self, precondition: Precondition) -> Self {
        self.preconditions.push(precondition);
        self
    }
}

/// Collaborators a handler runs against.
pub struct DispatchContext<'a> {
    pub roles: &'a dyn GuildRoleRepository,
    pub audit: &'a dyn AuditSink,
    pub responder: &'a dyn InteractionResponder,
}

pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Resolves the most specific route matching `identifier`.
    ///
    /// # Returns
    /// - `Some((&Route, &str))` - The route and the wildcard segment of the identifier
    /// - `None` - No route matches
    pub fn resolve<'r, 'i>(&'r self, identifier: &'i str) -> Option<(&'r Route, &'i str)> {
        self.routes
            .iter()
            .filter_map(|route| route.pattern.matches(identifier).map(|rest| (route, rest)))
            .max_by_key(|(route, _)| route.pattern.specificity())
    }

    /// Dispatches one interaction to its handler.
    ///
    /// # Arguments
    /// - `invocation` - The interaction; its response state is updated as replies go out
    /// - `ctx` - Role repository, audit sink and response channel for the handler
    ///
    /// # Returns
    /// - `Ok(Vec<Outcome>)` - One outcome per processed self-assign request
    /// - `Err(CommandError)` - The interaction could not be routed or the handler failed
    pub async fn dispatch(
        &self,
        invocation: &mut CommandInvocation,
        ctx: &DispatchContext<'_>,
    ) -> Result<Vec<Outcome>, CommandError> {
        let (route, wildcard) = self
            .resolve(&invocation.identifier)
            .ok_or_else(|| CommandError::UnknownCommand(invocation.identifier.clone()))?;

        precondition::check_all(&route.preconditions, invocation)?;
        let params = route.handler.decode(wildcard, &invocation.data)?;

        tracing::debug!(
            "Dispatching `{}` to {:?} in module {}",
            invocation.identifier,
            route.handler,
            route.module.name()
        );

        ctx.responder.defer().await?;
        invocation.response_state = ResponseState::Responded;

        match params {
            Params::None => {
                hello::run(invocation, ctx).await?;
                Ok(Vec::new())
            }
            Params::Request(request) => {
                let outcome = self_assign::button(invocation, ctx, &request).await?;
                Ok(vec![outcome])
            }
            Params::Entries(entries) => self_assign::select(invocation, ctx, &entries).await,
        }
    }
}

impl Default for Router {
    /// Routes of every command module the bot ships with.
    fn default() -> Self {
        Self::new(vec![
            Route::new(hello::NAME, CommandModule::Base, RouteHandler::Hello),
            Route::new(
                "b_selfassign_*",
                CommandModule::SelfAssign,
                RouteHandler::SelfAssignButton,
            )
            .require(Precondition::RequireGuild)
            .require(Precondition::RequireBotPermission(Permissions::MANAGE_ROLES)),
            Route::new(
                "s_selfassign_*",
                CommandModule::SelfAssign,
                RouteHandler::SelfAssignSelect,
            )
            .require(Precondition::RequireGuild)
            .require(Precondition::RequireBotPermission(Permissions::MANAGE_ROLES)),
        ])
    }
}
