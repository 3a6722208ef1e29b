mod verification_status_test;
