//! The request handler capability negotiated handlers implement.
//!
//! [`Handler`] is the single method a response producing unit has to expose. The
//! negotiation core only stores and forwards handlers, it never inspects them.
//! [`make_handler`] adapts a plain async function.

use async_trait::async_trait;
use std::error::Error;
use std::sync::Arc;

use http::{Request, Response};
use http_body::Body;

#[async_trait]
pub trait Handler<ReqBody>: Send + Sync {
    type RespBody: Body;
    type Error: Into<Box<dyn Error + Send + Sync>>;

    async fn call(&self, req: Request<ReqBody>) -> Result<Response<Self::RespBody>, Self::Error>;
}

/// A boxed handler, used to register handlers of different concrete types under one
/// [`HandlerMap`](crate::HandlerMap).
pub type BoxHandler<ReqBody, RespBody, Err> = Box<dyn Handler<ReqBody, RespBody = RespBody, Error = Err>>;

#[async_trait]
impl<ReqBody, H> Handler<ReqBody> for Box<H>
where
    ReqBody: Send + 'static,
    H: Handler<ReqBody> + ?Sized,
{
    type RespBody = H::RespBody;
    type Error = H::Error;

    async fn call(&self, req: Request<ReqBody>) -> Result<Response<Self::RespBody>, Self::Error> {
        (**self).call(req).await
    }
}

#[async_trait]
impl<ReqBody, H> Handler<ReqBody> for Arc<H>
where
    ReqBody: Send + 'static,
    H: Handler<ReqBody> + ?Sized,
{
    type RespBody = H::RespBody;
    type Error = H::Error;

    async fn call(&self, req: Request<ReqBody>) -> Result<Response<Self::RespBody>, Self::Error> {
        (**self).call(req).await
    }
}

#[derive(Debug)]
pub struct HandlerFn<F> {
    f: F,
}

#[async_trait]
impl<ReqBody, RespBody, Err, F, Fut> Handler<ReqBody> for HandlerFn<F>
where
    RespBody: Body,
    ReqBody: Send + 'static,
    F: Fn(Request<ReqBody>) -> Fut + Send + Sync,
    Err: Into<Box<dyn Error + Send + Sync>>,
    Fut: Future<Output = Result<Response<RespBody>, Err>> + Send,
{
    type RespBody = RespBody;
    type Error = Err;

    async fn call(&self, req: Request<ReqBody>) -> Result<Response<Self::RespBody>, Self::Error> {
        (self.f)(req).await
    }
}

pub fn make_handler<F, ReqBody, RespBody, Err, Ret>(f: F) -> HandlerFn<F>
where
    RespBody: Body,
    Err: Into<Box<dyn Error + Send + Sync>>,
    Ret: Future<Output = Result<Response<RespBody>, Err>>,
    F: Fn(Request<ReqBody>) -> Ret,
{
    HandlerFn { f }
}
