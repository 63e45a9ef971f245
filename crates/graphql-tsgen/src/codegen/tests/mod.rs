mod document_literal_tests;
