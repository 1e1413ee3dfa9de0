//! Inter-canister call boundary
//!
//! Clients take a `Runtime` instead of calling `ic_cdk::call` directly so the
//! orchestrator and quote paths can run against a recording fake in tests.
//! Endpoints construct clients over `IcRuntime`.

use async_trait::async_trait;
use candid::utils::{ArgumentDecoder, ArgumentEncoder};
use candid::Principal;

#[async_trait]
pub trait Runtime {
    async fn call<In, Out>(
        &self,
        id: Principal,
        method: &str,
        args: In,
    ) -> std::result::Result<Out, (i32, String)>
    where
        In: ArgumentEncoder + Send,
        Out: for<'a> ArgumentDecoder<'a>;
}

pub struct IcRuntime;

#[async_trait]
impl Runtime for IcRuntime {
    async fn call<In, Out>(
        &self,
        id: Principal,
        method: &str,
        args: In,
    ) -> std::result::Result<Out, (i32, String)>
    where
        In: ArgumentEncoder + Send,
        Out: for<'a> ArgumentDecoder<'a>,
    {
        ic_cdk::call(id, method, args)
            .await
            .map_err(|(code, msg)| (code as i32, msg))
    }
}

#[cfg(test)]
pub mod testing {
    //! Recording fake: replays queued candid responses and keeps the exact
    //! (canister, method) order of every call it served. Clones share state,
    //! so one fake can back several clients and record a single interleaved
    //! call order.

    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    struct MockReply {
        method: String,
        response: std::result::Result<Vec<u8>, (i32, String)>,
    }

    #[derive(Default)]
    struct MockState {
        calls: Mutex<Vec<(Principal, String)>>,
        replies: Mutex<VecDeque<MockReply>>,
    }

    #[derive(Clone, Default)]
    pub struct MockRuntime {
        state: Arc<MockState>,
    }

    impl MockRuntime {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a successful single-value reply for the next call to `method`
        pub fn push_ok<T: candid::CandidType>(&self, method: &str, value: T) {
            let bytes = candid::utils::encode_args((value,)).expect("mock reply must encode");
            self.state.replies.lock().unwrap().push_back(MockReply {
                method: method.to_string(),
                response: Ok(bytes),
            });
        }

        /// Queue a transport-level rejection for the next call to `method`
        pub fn push_reject(&self, method: &str, code: i32, message: &str) {
            self.state.replies.lock().unwrap().push_back(MockReply {
                method: method.to_string(),
                response: Err((code, message.to_string())),
            });
        }

        /// Methods called so far, in order
        pub fn called_methods(&self) -> Vec<String> {
            self.state
                .calls
                .lock()
                .unwrap()
                .iter()
                .map(|(_, method)| method.clone())
                .collect()
        }

        /// (canister, method) pairs called so far, in order
        pub fn calls(&self) -> Vec<(Principal, String)> {
            self.state.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Runtime for MockRuntime {
        async fn call<In, Out>(
            &self,
            id: Principal,
            method: &str,
            args: In,
        ) -> std::result::Result<Out, (i32, String)>
        where
            In: ArgumentEncoder + Send,
            Out: for<'a> ArgumentDecoder<'a>,
        {
            // Arguments must at least encode, even though the fake ignores them
            candid::utils::encode_args(args).expect("mock call args must encode");

            self.state
                .calls
                .lock()
                .unwrap()
                .push((id, method.to_string()));

            let reply = self
                .state
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| panic!("mock: unexpected call to '{}'", method));
            assert_eq!(
                reply.method, method,
                "mock: expected call to '{}', got '{}'",
                reply.method, method
            );

            let bytes = reply.response?;
            candid::utils::decode_args(&bytes)
                .map_err(|e| (0, format!("mock: reply decode failed: {}", e)))
        }
    }
}
