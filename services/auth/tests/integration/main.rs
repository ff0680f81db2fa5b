mod router_test;
