// Governance router - Dispatches proposal content to the handler of its route
// Only parameter change content ever reaches a params handler; other content
// types travel their own routes untouched.

use super::handler::{ProposalError, ProposalHandler};
use crate::params::Context;
use crate::types::{ProposalContent, GOV_ROUTE, PARAMS_ROUTE};
use std::collections::HashMap;
use tracing::debug;

/// Executes one kind of governance content
pub trait ContentHandler {
    fn handle_content(
        &self,
        ctx: &mut Context,
        content: &ProposalContent,
    ) -> Result<(), ProposalError>;
}

/// Handler of text proposals, which have no on-chain effect
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRoute;

impl ContentHandler for TextRoute {
    fn handle_content(
        &self,
        _ctx: &mut Context,
        content: &ProposalContent,
    ) -> Result<(), ProposalError> {
        match content {
            ProposalContent::Text { .. } => Ok(()),
            other => Err(ProposalError::UnrecognizedContent {
                route: GOV_ROUTE.to_string(),
                kind: other.kind().to_string(),
            }),
        }
    }
}

/// Adapts a parameter change handler to the router
#[derive(Debug, Clone)]
pub struct ParamChangeRoute<H> {
    handler: H,
}

impl<H: ProposalHandler> ParamChangeRoute<H> {
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}

impl<H: ProposalHandler> ContentHandler for ParamChangeRoute<H> {
    fn handle_content(
        &self,
        ctx: &mut Context,
        content: &ProposalContent,
    ) -> Result<(), ProposalError> {
        match content {
            ProposalContent::ParameterChange(proposal) => self.handler.handle(ctx, proposal),
            other => Err(ProposalError::UnrecognizedContent {
                route: PARAMS_ROUTE.to_string(),
                kind: other.kind().to_string(),
            }),
        }
    }
}

/// Route table of the governance module
#[derive(Default)]
pub struct GovRouter {
    routes: HashMap<String, Box<dyn ContentHandler + Send + Sync>>,
}

impl GovRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler of a route
    ///
    /// # Panics
    ///
    /// If the route is already registered. Routes are wired once at startup.
    pub fn add_route<C>(mut self, route: &str, handler: C) -> Self
    where
        C: ContentHandler + Send + Sync + 'static,
    {
        if self.routes.contains_key(route) {
            panic!("route {} has already been registered", route);
        }
        self.routes.insert(route.to_string(), Box::new(handler));
        self
    }

    pub fn has_route(&self, route: &str) -> bool {
        self.routes.contains_key(route)
    }

    /// Execute proposal content through the handler of its route
    pub fn handle(&self, ctx: &mut Context, content: &ProposalContent) -> Result<(), ProposalError> {
        let route = content.route();
        let handler = self
            .routes
            .get(route)
            .ok_or_else(|| ProposalError::UnknownRoute(route.to_string()))?;

        debug!("Routing {} proposal {:?} to {}", content.kind(), content.title(), route);
        handler.handle_content(ctx, content)
    }
}
