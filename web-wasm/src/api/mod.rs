pub mod mock_data;
