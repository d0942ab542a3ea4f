pub mod request;
pub mod response;

pub use request::{
    ClientInfo, CreateOrderParams, GetCoffeeDetailParams, InitializeParams, JsonRpcRequest,
    OrderItemParams, RpcId, ToolCallParams,
};
pub use response::{
    JsonRpcError, JsonRpcResponse, ToolErrorPayload, ToolResult, ToolResultContent,
};
