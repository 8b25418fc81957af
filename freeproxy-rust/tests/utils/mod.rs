pub mod mock_proxy_api;
